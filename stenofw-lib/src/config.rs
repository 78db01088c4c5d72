//! Protocol selection, either baked in with a cargo feature or picked at
//! runtime from a name or a stored selector byte.
use core::str::FromStr;

use crate::protocol::diagnostic::MatrixLayout;
use crate::protocol::Protocol;

const SELECTED_FEATURES: usize = cfg!(feature = "gemini") as usize
    + cfg!(feature = "tx-bolt") as usize
    + cfg!(feature = "nkro") as usize
    + cfg!(feature = "steno") as usize
    + cfg!(feature = "diagnostic-electronic") as usize
    + cfg!(feature = "diagnostic-haptic") as usize;

const _: () = assert!(
    SELECTED_FEATURES <= 1,
    "Can't compile with more than one protocol feature"
);

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("unknown protocol name")]
    UnknownProtocol,
    #[error("protocol selector {0} out of range")]
    SelectorOutOfRange(u8),
}

/// Selector order, also the order protocols are listed in.
const BY_SELECTOR: [(Protocol, &str); 6] = [
    (Protocol::Gemini, "gemini"),
    (Protocol::TxBolt, "tx-bolt"),
    (Protocol::Nkro, "nkro"),
    (Protocol::Steno, "steno"),
    (
        Protocol::Diagnostic(MatrixLayout::Electronic),
        "diagnostic-electronic",
    ),
    (
        Protocol::Diagnostic(MatrixLayout::Haptic),
        "diagnostic-haptic",
    ),
];

impl Protocol {
    /// The protocol picked by cargo feature, Gemini when none is set.
    pub const DEFAULT: Protocol = if cfg!(feature = "tx-bolt") {
        Protocol::TxBolt
    } else if cfg!(feature = "nkro") {
        Protocol::Nkro
    } else if cfg!(feature = "steno") {
        Protocol::Steno
    } else if cfg!(feature = "diagnostic-electronic") {
        Protocol::Diagnostic(MatrixLayout::Electronic)
    } else if cfg!(feature = "diagnostic-haptic") {
        Protocol::Diagnostic(MatrixLayout::Haptic)
    } else {
        Protocol::Gemini
    };

    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Protocol::Gemini => 0,
            Protocol::TxBolt => 1,
            Protocol::Nkro => 2,
            Protocol::Steno => 3,
            Protocol::Diagnostic(MatrixLayout::Electronic) => 4,
            Protocol::Diagnostic(MatrixLayout::Haptic) => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        BY_SELECTOR[self.selector() as usize].1
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Protocol {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let (protocol, _) = BY_SELECTOR
            .get(value as usize)
            .ok_or(ConfigError::SelectorOutOfRange(value))?;
        debug!("Selected protocol {} from selector", protocol);
        Ok(*protocol)
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    /// Case-insensitive, `txbolt` is accepted for `tx-bolt`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("txbolt") {
            return Ok(Protocol::TxBolt);
        }
        BY_SELECTOR
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(name))
            .map(|(protocol, _)| *protocol)
            .ok_or(ConfigError::UnknownProtocol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_without_features_is_gemini() {
        if SELECTED_FEATURES == 0 {
            assert_eq!(Protocol::Gemini, Protocol::default());
        }
        assert_eq!(Protocol::DEFAULT, Protocol::default());
    }

    #[test]
    fn selector_round_trip() {
        for value in 0..6 {
            let protocol = Protocol::try_from(value).unwrap();
            assert_eq!(value, protocol.selector());
        }
        assert_eq!(
            Err(ConfigError::SelectorOutOfRange(6)),
            Protocol::try_from(6)
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!(Ok(Protocol::Gemini), "gemini".parse());
        assert_eq!(Ok(Protocol::TxBolt), "TX-Bolt".parse());
        assert_eq!(Ok(Protocol::TxBolt), "txbolt".parse());
        assert_eq!(Ok(Protocol::Steno), " steno\n".parse());
        assert_eq!(
            Ok(Protocol::Diagnostic(MatrixLayout::Haptic)),
            "diagnostic-haptic".parse()
        );
        assert_eq!(Err(ConfigError::UnknownProtocol), "plover".parse::<Protocol>());
        assert_eq!(Err(ConfigError::UnknownProtocol), "".parse::<Protocol>());
    }

    #[test]
    fn name_parses_back() {
        for (protocol, _) in BY_SELECTOR {
            assert_eq!(Ok(protocol), protocol.name().parse());
        }
    }

    #[test]
    fn error_display() {
        assert_eq!("unknown protocol name", ConfigError::UnknownProtocol.to_string());
        assert_eq!(
            "protocol selector 9 out of range",
            ConfigError::SelectorOutOfRange(9).to_string()
        );
    }
}
