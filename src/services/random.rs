use rand::{thread_rng, Rng};

use crate::services::Toolkit;

pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

impl Toolkit {
    /// Random string of `length` characters from [`CHARSET`]. Not suitable for
    /// secrets.
    pub fn random_string(&self, length: usize) -> String {
        random_string(length)
    }
}

pub(crate) fn random_string(length: usize) -> String {
    let mut rng = thread_rng();
    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_requested_length() {
        let toolkit = Toolkit::default();
        assert_eq!(toolkit.random_string(32).len(), 32);
        assert_eq!(toolkit.random_string(0), "");
    }

    #[test]
    fn only_uses_charset() {
        let s = random_string(500);
        assert!(s.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn charset_is_62_alphanumerics() {
        assert_eq!(CHARSET.len(), 62);
        assert!(CHARSET.iter().all(|b| b.is_ascii_alphanumeric()));
    }
}
