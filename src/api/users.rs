use serde_json::Value;

use super::{decode, require};
use crate::catalog::{ErrorContext, USERS};
use crate::client::NamecheapClient;
use crate::error::NamecheapResult;
use crate::models::{Balances, PasswordChangeResult, ProductPrice};
use crate::normalize::{ResultSpec, normalize};
use crate::options::PricingRequest;
use crate::request::RequestParams;
use crate::transport::Transport;

pub const GET_PRICING: &str = "namecheap.users.getPricing";
pub const GET_BALANCES: &str = "namecheap.users.getBalances";
pub const CHANGE_PASSWORD: &str = "namecheap.users.changePassword";

const PRODUCT_TYPES: ResultSpec = ResultSpec::list(&["UserGetPricingResult", "ProductType"]);
const CATEGORIES: ResultSpec = ResultSpec::list(&["ProductCategory"]);
const PRODUCTS: ResultSpec = ResultSpec::list(&["Product"]);
const PRICES: ResultSpec = ResultSpec::list(&["Price"]);
const BALANCES: ResultSpec = ResultSpec::object(&["UserGetBalancesResult"]);
const PASSWORD_RESULT: ResultSpec = ResultSpec::object(&["UserChangePasswordResult"]).booleans(&["Success"]);

fn items(raw: &Value, spec: &ResultSpec) -> Vec<Value> {
    match normalize(raw, spec) {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

fn name_of(item: &Value) -> String {
    item.get("Name").and_then(Value::as_str).unwrap_or_default().to_string()
}

/// `namecheap.users.*` commands
pub struct UsersApi<'a, T: Transport> {
    client: &'a NamecheapClient<T>,
}

impl<'a, T: Transport> UsersApi<'a, T> {
    pub(crate) fn new(client: &'a NamecheapClient<T>) -> Self {
        Self { client }
    }

    /// Price rows for the request, flattened from the product type / category / product tree
    pub async fn get_pricing(&self, request: &PricingRequest) -> NamecheapResult<Vec<ProductPrice>> {
        let context = ErrorContext::product(request.product_type.as_str());
        let raw = self.client.request(GET_PRICING, request.to_params(), &USERS, &context).await?;

        let mut rows = Vec::new();
        for product_type in items(&raw, &PRODUCT_TYPES) {
            let type_name = name_of(&product_type);
            for category in items(&product_type, &CATEGORIES) {
                let category_name = name_of(&category);
                for product in items(&category, &PRODUCTS) {
                    let product_name = name_of(&product);
                    let prices: Vec<ProductPrice> = decode(&product, &PRICES)?;
                    rows.extend(prices.into_iter().map(|price| ProductPrice {
                        product_type: type_name.clone(),
                        category: category_name.clone(),
                        product: product_name.clone(),
                        ..price
                    }));
                }
            }
        }

        tracing::debug!("Pricing returned {} rows", rows.len());
        Ok(rows)
    }

    pub async fn get_balances(&self) -> NamecheapResult<Balances> {
        let raw = self.client.request(GET_BALANCES, RequestParams::new(), &USERS, &ErrorContext::default()).await?;
        decode(&raw, &BALANCES)
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> NamecheapResult<PasswordChangeResult> {
        require(old_password, "Old password")?;
        require(new_password, "New password")?;

        let params = RequestParams::new().with("OldPassword", old_password).with("NewPassword", new_password);
        let raw = self.client.request(CHANGE_PASSWORD, params, &USERS, &ErrorContext::default()).await?;
        decode(&raw, &PASSWORD_RESULT)
    }
}
