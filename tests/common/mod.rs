#![allow(dead_code)]

pub use templerun_test_utils::builders;
pub use templerun_test_utils::fake_executor::FakeExecutor;
pub use templerun_test_utils::init_tracing;
