use serde::Deserialize;

/// Account details for the authenticated organization.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    #[serde(rename = "organizationId")]
    pub organization_id: String,
    /// e.g. "Free", "Pro".
    pub plan: String,
    #[serde(default, rename = "maxCredits")]
    pub max_credits: u64,
    #[serde(default, rename = "usedCredits")]
    pub used_credits: u64,
}

impl AccountInfo {
    /// Credits left in the current billing period.
    pub fn remaining_credits(&self) -> u64 {
        self.max_credits.saturating_sub(self.used_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_credits_never_underflows() {
        let account = AccountInfo {
            organization_id: "org".into(),
            plan: "Free".into(),
            max_credits: 100,
            used_credits: 150,
        };
        assert_eq!(account.remaining_credits(), 0);
    }
}
