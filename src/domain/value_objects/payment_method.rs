//! Payment method of a sale

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    Wechat,
    Alipay,
    BankCard,
    Cash,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Wechat => "WeChat Pay",
            PaymentMethod::Alipay => "Alipay",
            PaymentMethod::BankCard => "Bank card",
            PaymentMethod::Cash => "Cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_card_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankCard).unwrap(),
            r#""bank-card""#
        );
    }

    #[test]
    fn default_is_wechat() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Wechat);
    }
}
