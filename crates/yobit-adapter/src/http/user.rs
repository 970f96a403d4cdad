/*
[INPUT]:  Coin names, amounts, addresses and coupon codes
[OUTPUT]: Balances, deposit addresses, withdrawal and coupon results
[POS]:    HTTP layer - account endpoints (require signed requests)
[UPDATE]: When adding new account endpoints or changing parameters
*/

// ### Account Endpoints

use rust_decimal::Decimal;

use crate::http::request::FormParams;
use crate::http::{PrivateClient, Result};
use crate::types::{
    AccountInfo, CreateCouponResponse, DepositAddressResponse, RedeemCouponResponse,
    WithdrawRequest, WithdrawResponse,
};

impl PrivateClient {
    /// Balances, API key rights and open order count
    ///
    /// POST /tapi/ method=getInfo
    pub async fn get_info(&self) -> Result<AccountInfo> {
        self.call("getInfo", FormParams::new(), &[]).await
    }

    /// Deposit address for a coin, optionally requesting a fresh one
    ///
    /// POST /tapi/ method=GetDepositAddress
    pub async fn deposit_address(
        &self,
        coin: &str,
        need_new: bool,
    ) -> Result<DepositAddressResponse> {
        let mut fields = FormParams::new().with("coinName", coin);
        if need_new {
            fields.set("need_new", "1");
        }
        self.call("GetDepositAddress", fields, &["coinName"]).await
    }

    /// Withdraw coins to an external address
    ///
    /// POST /tapi/ method=WithdrawCoinsToAddress
    pub async fn withdraw(&self, req: &WithdrawRequest) -> Result<WithdrawResponse> {
        let mut fields = FormParams::new();
        req.write_params(&mut fields);
        self.call("WithdrawCoinsToAddress", fields, WithdrawRequest::REQUIRED)
            .await
    }

    /// Create a coupon (Yobicode) funded from the balance
    ///
    /// POST /tapi/ method=CreateYobicode
    pub async fn create_coupon(
        &self,
        currency: &str,
        amount: Decimal,
    ) -> Result<CreateCouponResponse> {
        let fields = FormParams::new()
            .with("currency", currency)
            .with("amount", amount.to_string());
        self.call("CreateYobicode", fields, &["currency", "amount"])
            .await
    }

    /// Redeem a coupon into the balance
    ///
    /// POST /tapi/ method=RedeemYobicode
    pub async fn redeem_coupon(&self, coupon: &str) -> Result<RedeemCouponResponse> {
        let fields = FormParams::new().with("coupon", coupon);
        self.call("RedeemYobicode", fields, &["coupon"]).await
    }
}
