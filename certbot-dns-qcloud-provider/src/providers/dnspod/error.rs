//! `DNSPod` error code mapping

use crate::error::TransportError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::DnspodTransport;

/// `DNSPod` error code mapping
/// Reference: <https://cloud.tencent.com/document/api/1427/56192>
impl ProviderErrorMapper for DnspodTransport {
    fn provider_name(&self) -> &'static str {
        "dnspod"
    }

    fn map_error(&self, raw: RawApiError) -> TransportError {
        match raw.code.as_deref() {
            // ============ Authentication error ============
            Some(
                "AuthFailure"
                | "AuthFailure.InvalidAuthorization"
                | "AuthFailure.InvalidSecretId"
                | "AuthFailure.MFAFailure"
                | "AuthFailure.SecretIdNotFound"
                | "AuthFailure.SignatureExpire"
                | "AuthFailure.SignatureFailure"
                | "AuthFailure.TokenFailure"
                | "AuthFailure.UnauthorizedOperation"
                | "InvalidParameter.InvalidSecretId"
                | "InvalidParameter.InvalidSignature",
            ) => TransportError::InvalidCredentials {
                raw_message: Some(raw.message),
            },

            // ============ Frequency limit ============
            Some(
                "RequestLimitExceeded"
                | "RequestLimitExceeded.RequestLimitExceeded"
                | "RequestLimitExceeded.UinLimitExceeded"
                | "RequestLimitExceeded.IPLimitExceeded"
                | "FailedOperation.FrequencyLimit"
                | "InvalidParameter.OperationIsTooFrequent",
            ) => TransportError::RateLimited {
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // ============ The zone is not hosted ============
            Some("ResourceNotFound.NoDataOfDomain" | "InvalidParameterValue.DomainNotExists") => {
                TransportError::DomainNotFound {
                    raw_message: Some(raw.message),
                }
            }

            // ============ Permission/Operation Denied ============
            Some(
                "OperationDenied"
                | "OperationDenied.AccessDenied"
                | "OperationDenied.DomainOwnerAllowedOnly"
                | "OperationDenied.NoPermissionToOperateDomain"
                | "OperationDenied.NotResourceOwner"
                | "UnauthorizedOperation"
                | "FailedOperation.DomainIsLocked"
                | "FailedOperation.DomainIsSpam"
                | "FailedOperation.AccountIsLocked"
                | "FailedOperation.NotDomainOwner"
                | "FailedOperation.NotResourceOwner"
                | "InvalidParameter.PermissionDenied",
            ) => TransportError::PermissionDenied {
                raw_message: Some(raw.message),
            },

            // ============ Invalid parameters ============
            Some("InvalidParameter.RecordLineInvalid" | "InvalidParameter.LineNotExist") => {
                invalid_parameter("line", raw)
            }
            Some("InvalidParameter.RecordTypeInvalid") => invalid_parameter("type", raw),
            Some(
                "InvalidParameter.RecordValueInvalid" | "InvalidParameter.RecordValueLengthInvalid",
            ) => invalid_parameter("value", raw),
            Some("InvalidParameter.SubdomainInvalid") => invalid_parameter("subdomain", raw),
            Some("LimitExceeded.RecordTtlLimit") => invalid_parameter("ttl", raw),
            Some(
                "InvalidParameter.DomainInvalid"
                | "InvalidParameter.DomainTooLong"
                | "InvalidParameter.DomainTypeInvalid",
            ) => invalid_parameter("domain", raw),
            Some("InvalidParameter.RecordIdInvalid") => invalid_parameter("record_id", raw),
            Some("LimitExceeded.OffsetExceeded") => invalid_parameter("offset", raw),

            // ============ Other errors fallback ============
            _ => self.unknown_error(raw),
        }
    }
}

fn invalid_parameter(param: &str, raw: RawApiError) -> TransportError {
    TransportError::InvalidParameter {
        param: param.to_string(),
        detail: raw.message,
    }
}
