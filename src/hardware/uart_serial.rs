use embedded_io::{Read, ReadReady};

use super::traits::SerialInput;
use crate::error::PeripheralError;

/// Poll-then-read adapter over a buffered UART receiver.
pub struct UartSerial<R> {
    rx: R,
}

impl<R: Read + ReadReady> UartSerial<R> {
    pub fn new(rx: R) -> Self {
        Self { rx }
    }
}

impl<R: Read + ReadReady> SerialInput for UartSerial<R> {
    fn is_readable(&mut self) -> Result<bool, PeripheralError> {
        self.rx.read_ready().map_err(|_| PeripheralError::Serial)
    }

    fn read_byte(&mut self) -> Result<u8, PeripheralError> {
        let mut byte = [0u8; 1];
        self.rx
            .read_exact(&mut byte)
            .map_err(|_| PeripheralError::Serial)?;
        Ok(byte[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{ErrorKind, ErrorType};

    struct MockRx {
        pending: &'static [u8],
        broken: bool,
    }

    impl ErrorType for MockRx {
        type Error = ErrorKind;
    }

    impl Read for MockRx {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            let n = buf.len().min(self.pending.len());
            buf[..n].copy_from_slice(&self.pending[..n]);
            self.pending = &self.pending[n..];
            Ok(n)
        }
    }

    impl ReadReady for MockRx {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.pending.is_empty())
        }
    }

    #[test]
    fn test_reads_one_byte_at_a_time() {
        let mut serial = UartSerial::new(MockRx {
            pending: b"7?",
            broken: false,
        });

        assert!(serial.is_readable().unwrap());
        assert_eq!(serial.read_byte().unwrap(), b'7');
        assert!(serial.is_readable().unwrap());
        assert_eq!(serial.read_byte().unwrap(), b'?');
        assert!(!serial.is_readable().unwrap());
    }

    #[test]
    fn test_read_error_mapped() {
        let mut serial = UartSerial::new(MockRx {
            pending: b"1",
            broken: true,
        });
        assert_eq!(serial.read_byte(), Err(PeripheralError::Serial));
    }
}
