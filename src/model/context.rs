use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inferred category of the analyzed document or message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentContext {
    LegalAgreement,
    PartnershipOffer,
    ClientInquiry,
    VendorProposal,
    ConsumerMessage,
}

impl DocumentContext {
    pub const ALL: [DocumentContext; 5] = [
        DocumentContext::LegalAgreement,
        DocumentContext::PartnershipOffer,
        DocumentContext::ClientInquiry,
        DocumentContext::VendorProposal,
        DocumentContext::ConsumerMessage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentContext::LegalAgreement => "legal_agreement",
            DocumentContext::PartnershipOffer => "partnership_offer",
            DocumentContext::ClientInquiry => "client_inquiry",
            DocumentContext::VendorProposal => "vendor_proposal",
            DocumentContext::ConsumerMessage => "consumer_message",
        }
    }

    /// Parse a wire label such as `"vendor_proposal"`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ctx| ctx.as_str().eq_ignore_ascii_case(label.trim()))
    }

    /// Business contexts get verifiability checks and business/company assessments
    pub fn is_business(&self) -> bool {
        matches!(
            self,
            DocumentContext::PartnershipOffer
                | DocumentContext::ClientInquiry
                | DocumentContext::VendorProposal
        )
    }
}

impl fmt::Display for DocumentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
