use super::{decode, require};
use crate::catalog::{ErrorContext, TRANSFER};
use crate::client::NamecheapClient;
use crate::domain::split_domain;
use crate::error::{NamecheapError, NamecheapResult};
use crate::models::{TransferCreateResult, TransferList, TransferStatus, TransferUpdateResult};
use crate::normalize::ResultSpec;
use crate::options::TransferListOptions;
use crate::request::RequestParams;
use crate::transport::Transport;

pub const CREATE: &str = "namecheap.domains.transfer.create";
pub const GET_STATUS: &str = "namecheap.domains.transfer.getStatus";
pub const UPDATE_STATUS: &str = "namecheap.domains.transfer.updateStatus";
pub const GET_LIST: &str = "namecheap.domains.transfer.getList";

const CREATE_RESULT: ResultSpec =
    ResultSpec::object(&["DomainTransferCreateResult"]).rename(&[("Transfer", "Transferred")]).booleans(&["Transferred"]);
const STATUS_RESULT: ResultSpec = ResultSpec::object(&["DomainTransferGetStatusResult"]);
const UPDATE_RESULT: ResultSpec = ResultSpec::object(&["DomainTransferUpdateStatusResult"])
    .rename(&[("Resubmit", "Resubmitted")])
    .booleans(&["Resubmitted"]);
const LIST_TRANSFERS: ResultSpec =
    ResultSpec::list(&["TransferGetListResult", "Transfer"]).datetimes(&["TransferDate", "StatusDate"]);
const LIST_PAGING: ResultSpec = ResultSpec::object(&["Paging"]);

/// `namecheap.domains.transfer.*` commands
pub struct TransferApi<'a, T: Transport> {
    client: &'a NamecheapClient<T>,
}

impl<'a, T: Transport> TransferApi<'a, T> {
    pub(crate) fn new(client: &'a NamecheapClient<T>) -> Self {
        Self { client }
    }

    /// Start transferring `domain` to Namecheap
    pub async fn create(
        &self,
        domain: &str,
        years: u32,
        epp_code: Option<&str>,
        promotion_code: Option<&str>,
    ) -> NamecheapResult<TransferCreateResult> {
        require(domain, "Domain name")?;
        if years == 0 {
            return Err(NamecheapError::InvalidInput("Transfer period must be at least one year".to_string()));
        }
        let name = split_domain(domain)?.registrable();

        let mut params = RequestParams::new().with("DomainName", name.as_str()).with("Years", years);
        params.insert_opt("EPPCode", epp_code.filter(|c| !c.is_empty()));
        params.insert_opt("PromotionCode", promotion_code.filter(|c| !c.is_empty()));

        let raw = self.client.request(CREATE, params, &TRANSFER, &ErrorContext::for_domain(name)).await?;
        decode(&raw, &CREATE_RESULT)
    }

    pub async fn get_status(&self, transfer_id: u64) -> NamecheapResult<TransferStatus> {
        let params = RequestParams::new().with("TransferID", transfer_id);
        let raw = self.client.request(GET_STATUS, params, &TRANSFER, &ErrorContext::transfer(transfer_id)).await?;
        decode(&raw, &STATUS_RESULT)
    }

    /// Resubmit a transfer that is waiting for it
    pub async fn update_status(&self, transfer_id: u64, resubmit: bool) -> NamecheapResult<TransferUpdateResult> {
        let params = RequestParams::new().with("TransferID", transfer_id).with("Resubmit", resubmit);
        let raw = self.client.request(UPDATE_STATUS, params, &TRANSFER, &ErrorContext::transfer(transfer_id)).await?;
        decode(&raw, &UPDATE_RESULT)
    }

    pub async fn get_list(&self, options: &TransferListOptions) -> NamecheapResult<TransferList> {
        let params = options.to_params()?;
        let raw = self.client.request(GET_LIST, params, &TRANSFER, &ErrorContext::default()).await?;

        Ok(TransferList { transfers: decode(&raw, &LIST_TRANSFERS)?, paging: decode(&raw, &LIST_PAGING)? })
    }
}
