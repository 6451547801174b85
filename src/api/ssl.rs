use serde::Deserialize;

use super::{decode, require};
use crate::catalog::{ErrorContext, SSL};
use crate::client::NamecheapClient;
use crate::error::{NamecheapError, NamecheapResult};
use crate::models::{CsrDetails, SslActivateResult, SslCreateResult, SslInfo, SslList, de};
use crate::normalize::ResultSpec;
use crate::options::SslListOptions;
use crate::request::RequestParams;
use crate::transport::Transport;

pub const GET_LIST: &str = "namecheap.ssl.getList";
pub const CREATE: &str = "namecheap.ssl.create";
pub const GET_INFO: &str = "namecheap.ssl.getInfo";
pub const PARSE_CSR: &str = "namecheap.ssl.parseCSR";
pub const ACTIVATE: &str = "namecheap.ssl.activate";

const LIST_CERTIFICATES: ResultSpec = ResultSpec::list(&["SSLListResult", "SSL"])
    .rename(&[("IsExpiredYN", "IsExpired")])
    .datetimes(&["PurchaseDate", "ExpireDate", "ActivationExpireDate"]);
const LIST_PAGING: ResultSpec = ResultSpec::object(&["Paging"]);
const CREATE_RESULT: ResultSpec = ResultSpec::object(&["SSLCreateResult"]);
const CREATED_CERTIFICATES: ResultSpec = ResultSpec::list(&["SSLCreateResult", "SSLCertificate"]).datetimes(&["Created"]);
const INFO_RESULT: ResultSpec =
    ResultSpec::object(&["SSLGetInfoResult"]).datetimes(&["IssuedOn", "Expires", "ActivationExpireDate"]);
const INFO_DETAILS: ResultSpec = ResultSpec::object(&["SSLGetInfoResult", "CertificateDetails"]);
const INFO_PROVIDER: ResultSpec = ResultSpec::object(&["SSLGetInfoResult", "Provider"]);
const CSR_DETAILS: ResultSpec = ResultSpec::object(&["SSLParseCSRResult", "CSRDetails"]).booleans(&["ValidTrueDomain"]);
const ACTIVATE_RESULT: ResultSpec = ResultSpec::object(&["SSLActivateResult"]);

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct CertificateDetails {
    #[serde(deserialize_with = "de::opt_string")]
    common_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    approver_email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Provider {
    #[serde(deserialize_with = "de::opt_string")]
    name: Option<String>,
}

/// `namecheap.ssl.*` commands
pub struct SslApi<'a, T: Transport> {
    client: &'a NamecheapClient<T>,
}

impl<'a, T: Transport> SslApi<'a, T> {
    pub(crate) fn new(client: &'a NamecheapClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_list(&self, options: &SslListOptions) -> NamecheapResult<SslList> {
        let params = options.to_params()?;
        let raw = self.client.request(GET_LIST, params, &SSL, &ErrorContext::default()).await?;

        Ok(SslList { certificates: decode(&raw, &LIST_CERTIFICATES)?, paging: decode(&raw, &LIST_PAGING)? })
    }

    /// Order a certificate; `extra` carries optional command parameters such as `PromotionCode`
    pub async fn create(
        &self,
        years: u32,
        certificate_type: &str,
        extra: RequestParams,
    ) -> NamecheapResult<SslCreateResult> {
        require(certificate_type, "Certificate type")?;
        if years == 0 {
            return Err(NamecheapError::InvalidInput("Certificate validity must be at least one year".to_string()));
        }

        let params = RequestParams::new().with("Years", years).with("Type", certificate_type).merge(extra);
        let raw = self.client.request(CREATE, params, &SSL, &ErrorContext::product(certificate_type)).await?;

        let mut result: SslCreateResult = decode(&raw, &CREATE_RESULT)?;
        result.certificates = decode(&raw, &CREATED_CERTIFICATES)?;
        Ok(result)
    }

    pub async fn get_info(&self, certificate_id: u64) -> NamecheapResult<SslInfo> {
        let params = RequestParams::new().with("CertificateID", certificate_id);
        let raw = self.client.request(GET_INFO, params, &SSL, &ErrorContext::certificate(certificate_id)).await?;

        let details: CertificateDetails = decode(&raw, &INFO_DETAILS)?;
        let provider: Provider = decode(&raw, &INFO_PROVIDER)?;
        let mut info: SslInfo = decode(&raw, &INFO_RESULT)?;
        info.common_name = details.common_name;
        info.approver_email = details.approver_email;
        info.provider = provider.name;
        Ok(info)
    }

    /// Decode a certificate signing request
    pub async fn parse_csr(&self, csr: &str) -> NamecheapResult<CsrDetails> {
        require(csr, "CSR")?;
        let params = RequestParams::new().with("csr", csr);
        let raw = self.client.request(PARSE_CSR, params, &SSL, &ErrorContext::default()).await?;
        decode(&raw, &CSR_DETAILS)
    }

    pub async fn activate(
        &self,
        certificate_id: u64,
        csr: &str,
        web_server_type: &str,
        approver_email: &str,
        extra: RequestParams,
    ) -> NamecheapResult<SslActivateResult> {
        require(csr, "CSR")?;
        require(web_server_type, "Web server type")?;
        require(approver_email, "Approver email")?;

        let params = RequestParams::new()
            .with("CertificateID", certificate_id)
            .with("CSR", csr)
            .with("WebServerType", web_server_type)
            .with("ApproverEmail", approver_email)
            .merge(extra);
        let raw = self.client.request(ACTIVATE, params, &SSL, &ErrorContext::certificate(certificate_id)).await?;
        decode(&raw, &ACTIVATE_RESULT)
    }
}
