// Integration test entry point for rule engine behavioral tests.
#[path = "enforcement/test_rule_boundaries.rs"]
mod test_rule_boundaries;
#[path = "enforcement/test_traversal_order.rs"]
mod test_traversal_order;
#[path = "enforcement/test_run_isolation.rs"]
mod test_run_isolation;
