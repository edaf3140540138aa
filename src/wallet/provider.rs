use std::fmt;
use std::str::FromStr;

use super::WalletError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WalletProvider {
    Nami,
    Eternl,
    Flint,
    Lace,
    Typhon,
    Yoroi,
    Gero,
    NuFi,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 8] = [
        Self::Nami,
        Self::Eternl,
        Self::Flint,
        Self::Lace,
        Self::Typhon,
        Self::Yoroi,
        Self::Gero,
        Self::NuFi,
    ];

    /// Key the provider injects itself under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Nami => "nami",
            Self::Eternl => "eternl",
            Self::Flint => "flint",
            Self::Lace => "lace",
            Self::Typhon => "typhon",
            Self::Yoroi => "yoroi",
            Self::Gero => "gerowallet",
            Self::NuFi => "nufi",
        }
    }
}

impl fmt::Display for WalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WalletProvider {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "gero" => Ok(Self::Gero),
            name => Self::ALL
                .into_iter()
                .find(|provider| provider.key() == name)
                .ok_or_else(|| WalletError::UnknownProvider(s.into())),
        }
    }
}
