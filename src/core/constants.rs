//! Well-known X.509v3 extension identifiers and their registered names.
//!
//! Arcs follow RFC 5280 section 4.2 and the PKIX private extension arc.

// =============================================================================
// ARC PREFIXES
// =============================================================================

/// `id-ce` (2.5.29): certificate extension arc.
pub const ID_CE: &[u64] = &[2, 5, 29];

/// `id-pe` (1.3.6.1.5.5.7.1): PKIX private extension arc.
pub const ID_PE: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 1];

// =============================================================================
// STANDARD EXTENSIONS (RFC 5280)
// =============================================================================

/// Subject key identifier.
pub const SUBJECT_KEY_IDENTIFIER: &[u64] = &[2, 5, 29, 14];

/// Key usage.
pub const KEY_USAGE: &[u64] = &[2, 5, 29, 15];

/// Private key usage period.
pub const PRIVATE_KEY_USAGE_PERIOD: &[u64] = &[2, 5, 29, 16];

/// Subject alternative name.
pub const SUBJECT_ALT_NAME: &[u64] = &[2, 5, 29, 17];

/// Issuer alternative name.
pub const ISSUER_ALT_NAME: &[u64] = &[2, 5, 29, 18];

/// Basic constraints.
pub const BASIC_CONSTRAINTS: &[u64] = &[2, 5, 29, 19];

/// CRL number.
pub const CRL_NUMBER: &[u64] = &[2, 5, 29, 20];

/// CRL reason code.
pub const CRL_REASON: &[u64] = &[2, 5, 29, 21];

/// Invalidity date.
pub const INVALIDITY_DATE: &[u64] = &[2, 5, 29, 24];

/// Delta CRL indicator.
pub const DELTA_CRL_INDICATOR: &[u64] = &[2, 5, 29, 27];

/// Issuing distribution point.
pub const ISSUING_DISTRIBUTION_POINT: &[u64] = &[2, 5, 29, 28];

/// Certificate issuer.
pub const CERTIFICATE_ISSUER: &[u64] = &[2, 5, 29, 29];

/// Name constraints.
pub const NAME_CONSTRAINTS: &[u64] = &[2, 5, 29, 30];

/// CRL distribution points.
pub const CRL_DISTRIBUTION_POINTS: &[u64] = &[2, 5, 29, 31];

/// Certificate policies.
pub const CERTIFICATE_POLICIES: &[u64] = &[2, 5, 29, 32];

/// Policy mappings.
pub const POLICY_MAPPINGS: &[u64] = &[2, 5, 29, 33];

/// Authority key identifier.
pub const AUTHORITY_KEY_IDENTIFIER: &[u64] = &[2, 5, 29, 35];

/// Policy constraints.
pub const POLICY_CONSTRAINTS: &[u64] = &[2, 5, 29, 36];

/// Extended key usage.
pub const EXT_KEY_USAGE: &[u64] = &[2, 5, 29, 37];

/// Freshest CRL.
pub const FRESHEST_CRL: &[u64] = &[2, 5, 29, 46];

/// Inhibit any-policy.
pub const INHIBIT_ANY_POLICY: &[u64] = &[2, 5, 29, 54];

/// Authority information access.
pub const AUTHORITY_INFO_ACCESS: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 1, 1];

/// Subject information access.
pub const SUBJECT_INFO_ACCESS: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 1, 11];

/// Certificate transparency precertificate SCT list (RFC 6962).
pub const CT_PRECERT_SCTS: &[u64] = &[1, 3, 6, 1, 4, 1, 11129, 2, 4, 2];

// =============================================================================
// NAME TABLE
// =============================================================================

/// Registered extension names: `(short name, long name, arcs)`.
pub const STANDARD_EXTENSIONS: &[(&str, &str, &[u64])] = &[
    ("subjectKeyIdentifier", "X509v3 Subject Key Identifier", SUBJECT_KEY_IDENTIFIER),
    ("keyUsage", "X509v3 Key Usage", KEY_USAGE),
    ("privateKeyUsagePeriod", "X509v3 Private Key Usage Period", PRIVATE_KEY_USAGE_PERIOD),
    ("subjectAltName", "X509v3 Subject Alternative Name", SUBJECT_ALT_NAME),
    ("issuerAltName", "X509v3 Issuer Alternative Name", ISSUER_ALT_NAME),
    ("basicConstraints", "X509v3 Basic Constraints", BASIC_CONSTRAINTS),
    ("crlNumber", "X509v3 CRL Number", CRL_NUMBER),
    ("CRLReason", "X509v3 CRL Reason Code", CRL_REASON),
    ("invalidityDate", "Invalidity Date", INVALIDITY_DATE),
    ("deltaCRL", "X509v3 Delta CRL Indicator", DELTA_CRL_INDICATOR),
    ("issuingDistributionPoint", "X509v3 Issuing Distribution Point", ISSUING_DISTRIBUTION_POINT),
    ("certificateIssuer", "X509v3 Certificate Issuer", CERTIFICATE_ISSUER),
    ("nameConstraints", "X509v3 Name Constraints", NAME_CONSTRAINTS),
    ("crlDistributionPoints", "X509v3 CRL Distribution Points", CRL_DISTRIBUTION_POINTS),
    ("certificatePolicies", "X509v3 Certificate Policies", CERTIFICATE_POLICIES),
    ("policyMappings", "X509v3 Policy Mappings", POLICY_MAPPINGS),
    ("authorityKeyIdentifier", "X509v3 Authority Key Identifier", AUTHORITY_KEY_IDENTIFIER),
    ("policyConstraints", "X509v3 Policy Constraints", POLICY_CONSTRAINTS),
    ("extendedKeyUsage", "X509v3 Extended Key Usage", EXT_KEY_USAGE),
    ("freshestCRL", "X509v3 Freshest CRL", FRESHEST_CRL),
    ("inhibitAnyPolicy", "X509v3 Inhibit Any Policy", INHIBIT_ANY_POLICY),
    ("authorityInfoAccess", "Authority Information Access", AUTHORITY_INFO_ACCESS),
    ("subjectInfoAccess", "Subject Information Access", SUBJECT_INFO_ACCESS),
    ("ct_precert_scts", "CT Precertificate SCTs", CT_PRECERT_SCTS),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_unique() {
        for (i, (short, long, _)) in STANDARD_EXTENSIONS.iter().enumerate() {
            for (other_short, other_long, _) in &STANDARD_EXTENSIONS[i + 1..] {
                assert_ne!(short, other_short);
                assert_ne!(long, other_long);
            }
        }
    }

    #[test]
    fn test_table_arcs_non_empty() {
        assert!(STANDARD_EXTENSIONS.iter().all(|(_, _, arcs)| !arcs.is_empty()));
    }

    #[test]
    fn test_ce_extensions_share_prefix() {
        assert!(BASIC_CONSTRAINTS.starts_with(ID_CE));
        assert!(KEY_USAGE.starts_with(ID_CE));
        assert!(AUTHORITY_INFO_ACCESS.starts_with(ID_PE));
    }
}
