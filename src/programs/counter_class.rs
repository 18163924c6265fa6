//! A class with a public field and a mutating method

use std::io::BufRead;

use compy_runtime::{add, Output, Result};

use super::Console;
use crate::frontend::config::ProgramConfig;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestClass {
    pub test_field: i64,
}

impl TestClass {
    /// The constructor prints a temporary before the instance exists
    pub fn new<O: Output, I: BufRead>(console: &mut Console<O, I>) -> Result<Self> {
        let test_var = 123;
        console.print(test_var)?;
        Ok(Self::default())
    }

    pub fn increment_test(&mut self) -> Result<()> {
        self.test_field = add(self.test_field, 1)?;
        Ok(())
    }
}

pub fn run<O: Output, I: BufRead>(console: &mut Console<O, I>, _config: &ProgramConfig) -> Result<()> {
    let mut test_instance = TestClass::new(console)?;
    console.print(test_instance.test_field)?;

    test_instance.increment_test()?;
    console.print(test_instance.test_field)
}
