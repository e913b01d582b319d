#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// Records every write; fails the writes whose index is in `fail_on`.
#[derive(Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail_on: Vec<usize>,
}

impl MockI2c {
    pub fn failing_on(fail_on: &[usize]) -> Self {
        Self {
            writes: Vec::new(),
            fail_on: fail_on.to_vec(),
        }
    }

    /// Brightness levels sent, in order.
    pub fn brightness_writes(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, data)| data.len() == 1 && data[0] & 0xF0 == 0xE0)
            .map(|(_, data)| data[0] & 0x0F)
            .collect()
    }

    pub fn flush_writes(&self) -> Vec<&[u8]> {
        self.writes
            .iter()
            .filter(|(_, data)| data.len() == 17)
            .map(|(_, data)| data.as_slice())
            .collect()
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        let index = self.writes.len();
        self.writes.push((address, data.to_vec()));
        if self.fail_on.contains(&index) {
            return Err(ErrorKind::Other);
        }
        Ok(())
    }

    fn read(&mut self, _address: u8, _buffer: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_read(
        &mut self,
        _address: u8,
        _write: &[u8],
        _read: &mut [u8],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            if let Operation::Write(data) = operation {
                self.write(address, data)?;
            }
        }
        Ok(())
    }
}

/// Sums requested delays instead of sleeping.
#[derive(Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
