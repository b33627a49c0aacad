//! Output requests and the fixed strength tables.

use crate::error::{Error, Result};

/// Largest word or character count a single request may ask for.
pub const MAX_COUNT: u32 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Hex,
    Password,
}

/// One line of output: how many words (hex) or characters (password) to draw.
///
/// `bits` is the nominal strength label from the fixed tables. It selects the
/// count and is printed; nothing computes it from the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRequest {
    pub kind: Kind,
    pub bits: Option<u32>,
    pub count: u32,
}

pub const HEX_REQUESTS: [OutputRequest; 3] = [
    OutputRequest::labelled(Kind::Hex, 64, 2),
    OutputRequest::labelled(Kind::Hex, 128, 4),
    OutputRequest::labelled(Kind::Hex, 256, 8),
];

pub const PASSWORD_REQUESTS: [OutputRequest; 3] = [
    OutputRequest::labelled(Kind::Password, 65, 11),
    OutputRequest::labelled(Kind::Password, 130, 22),
    OutputRequest::labelled(Kind::Password, 256, 43),
];

impl OutputRequest {
    const fn labelled(kind: Kind, bits: u32, count: u32) -> Self {
        Self {
            kind,
            bits: Some(bits),
            count,
        }
    }

    /// An unlabelled request with a caller-chosen count.
    pub fn custom(kind: Kind, count: u32) -> Result<Self> {
        if count > MAX_COUNT {
            return Err(Error::InvalidArgument(format!(
                "{count} exceeds the limit of {MAX_COUNT}"
            )));
        }
        Ok(Self {
            kind,
            bits: None,
            count,
        })
    }

    /// Parse a count from the command line.
    pub fn parse(kind: Kind, raw: &str) -> Result<Self> {
        let count = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidArgument(format!("{raw} is not a count")))?;
        Self::custom(kind, count)
    }

    /// Label printed before the value, without the trailing space.
    pub fn label(&self) -> String {
        match (self.bits, self.kind) {
            (Some(bits), _) => format!("{bits}-bit:"),
            (None, Kind::Hex) => format!("{} words:", self.count),
            (None, Kind::Password) => format!("{} chars:", self.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tables() {
        let hex: Vec<_> = HEX_REQUESTS.iter().map(|r| (r.bits, r.count)).collect();
        assert_eq!(hex, [(Some(64), 2), (Some(128), 4), (Some(256), 8)]);

        let pass: Vec<_> = PASSWORD_REQUESTS.iter().map(|r| (r.bits, r.count)).collect();
        assert_eq!(pass, [(Some(65), 11), (Some(130), 22), (Some(256), 43)]);
    }

    #[test]
    fn labels() {
        assert_eq!(HEX_REQUESTS[1].label(), "128-bit:");
        assert_eq!(OutputRequest::custom(Kind::Hex, 3).unwrap().label(), "3 words:");
        assert_eq!(OutputRequest::custom(Kind::Password, 0).unwrap().label(), "0 chars:");
    }

    #[test]
    fn bounds() {
        assert!(OutputRequest::custom(Kind::Hex, MAX_COUNT).is_ok());
        assert!(matches!(
            OutputRequest::custom(Kind::Password, MAX_COUNT + 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn negative_and_garbage_counts_are_rejected() {
        for raw in ["-1", "abc", "", "1.5", "99999999999"] {
            assert!(
                matches!(OutputRequest::parse(Kind::Hex, raw), Err(Error::InvalidArgument(_))),
                "{raw:?}"
            );
        }
        assert_eq!(OutputRequest::parse(Kind::Hex, " 12 ").unwrap().count, 12);
    }
}
