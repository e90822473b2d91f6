mod exec_log;
mod logging_driver;

pub use exec_log::ExecLog;
pub use logging_driver::LoggingDriver;

pub use qbrecord_driver_memory::Memory;

use qbrecord::Db;

/// A database backed by the in-memory driver, with every operation recorded.
pub struct DbTest {
    pub db: Db,
    log: ExecLog,
}

impl DbTest {
    pub fn new(driver: Memory) -> DbTest {
        init_logging();

        let driver = LoggingDriver::new(Box::new(driver));
        let log = ExecLog::new(driver.ops_log_handle());

        DbTest {
            db: Db::new(driver),
            log,
        }
    }

    pub fn log(&mut self) -> &mut ExecLog {
        &mut self.log
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a [`DbTest`] whose driver knows the schemas of the given models.
#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let driver = $crate::Memory::new()
            $( .with_table(<$model as qbrecord::Model>::schema().clone()) )*;
        $crate::DbTest::new(driver)
    }};
}
