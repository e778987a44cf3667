pub mod test_plan_logger;
