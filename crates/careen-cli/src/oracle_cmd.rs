use std::io::Write;
use std::process::{Command, Stdio};

use careen_repair::Oracle;

/// Oracle backed by an external command: the prompt goes to the child's
/// stdin, the reply is its stdout. Transport failures surface on stderr
/// and yield an empty reply; policy beyond that belongs to the command
/// itself.
pub struct CommandOracle {
    program: String,
    args: Vec<String>,
}

impl CommandOracle {
    /// Build from a whitespace-separated command line, e.g.
    /// `"my-oracle --model small"`.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?.to_string();
        Some(Self {
            program,
            args: parts.map(str::to_string).collect(),
        })
    }

    fn invoke(&self, prompt: &str) -> std::io::Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(prompt.as_bytes())?;
        }
        drop(child.stdin.take());

        let output = child.wait_with_output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Oracle for CommandOracle {
    fn generate(&mut self, prompt: &str) -> String {
        match self.invoke(prompt) {
            Ok(reply) => reply,
            Err(e) => {
                eprintln!("careen repair: oracle command failed: {e}");
                String::new()
            }
        }
    }
}
