//! Wire types shared across BlindPay resources.

use serde::{Deserialize, Serialize};

/// ISO 3166-1 alpha-2 country code, uppercase on the wire (`"US"`, `"BR"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Af,
    Al,
    Dz,
    As,
    Ad,
    Ao,
    Ai,
    Aq,
    Ag,
    Ar,
    Am,
    Aw,
    Au,
    At,
    Az,
    Bs,
    Bh,
    Bd,
    Bb,
    By,
    Be,
    Bz,
    Bj,
    Bm,
    Bt,
    Bo,
    Bq,
    Ba,
    Bw,
    Bv,
    Br,
    Io,
    Bn,
    Bg,
    Bf,
    Bi,
    Cv,
    Kh,
    Cm,
    Ca,
    Ky,
    Cf,
    Td,
    Cl,
    Cn,
    Cx,
    Cc,
    Co,
    Km,
    Cd,
    Cg,
    Ck,
    Cr,
    Hr,
    Cu,
    Cw,
    Cy,
    Cz,
    Ci,
    Dk,
    Dj,
    Dm,
    Do,
    Ec,
    Eg,
    Sv,
    Gq,
    Er,
    Ee,
    Sz,
    Et,
    Fk,
    Fo,
    Fj,
    Fi,
    Fr,
    Gf,
    Pf,
    Tf,
    Ga,
    Gm,
    Ge,
    De,
    Gh,
    Gi,
    Gr,
    Gl,
    Gd,
    Gp,
    Gu,
    Gt,
    Gg,
    Gn,
    Gw,
    Gy,
    Ht,
    Hm,
    Va,
    Hn,
    Hk,
    Hu,
    Is,
    In,
    Id,
    Ir,
    Iq,
    Ie,
    Im,
    Il,
    It,
    Jm,
    Jp,
    Je,
    Jo,
    Kz,
    Ke,
    Ki,
    Kp,
    Kr,
    Kw,
    Kg,
    La,
    Lv,
    Lb,
    Ls,
    Lr,
    Ly,
    Li,
    Lt,
    Lu,
    Mo,
    Mg,
    Mw,
    My,
    Mv,
    Ml,
    Mt,
    Mh,
    Mq,
    Mr,
    Mu,
    Yt,
    Mx,
    Fm,
    Md,
    Mc,
    Mn,
    Me,
    Ms,
    Ma,
    Mz,
    Mm,
    Na,
    Nr,
    Np,
    Nl,
    Nc,
    Nz,
    Ni,
    Ne,
    Ng,
    Nu,
    Nf,
    Mp,
    No,
    Om,
    Pk,
    Pw,
    Ps,
    Pa,
    Pg,
    Py,
    Pe,
    Ph,
    Pn,
    Pl,
    Pt,
    Pr,
    Qa,
    Mk,
    Ro,
    Ru,
    Rw,
    Re,
    Bl,
    Sh,
    Kn,
    Lc,
    Mf,
    Pm,
    Vc,
    Ws,
    Sm,
    St,
    Sa,
    Sn,
    Rs,
    Sc,
    Sl,
    Sg,
    Sx,
    Sk,
    Si,
    Sb,
    So,
    Za,
    Gs,
    Ss,
    Es,
    Lk,
    Sd,
    Sr,
    Sj,
    Se,
    Ch,
    Sy,
    Tw,
    Tj,
    Tz,
    Th,
    Tl,
    Tg,
    Tk,
    To,
    Tt,
    Tn,
    Tr,
    Tm,
    Tc,
    Tv,
    Ug,
    Ua,
    Ae,
    Gb,
    Um,
    Us,
    Uy,
    Uz,
    Vu,
    Ve,
    Vn,
    Vg,
    Vi,
    Wf,
    Eh,
    Ye,
    Zm,
    Zw,
    Ax,
}

/// Payment rail a bank account or payout travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rail {
    /// US domestic wire
    Wire,
    /// US ACH
    Ach,
    /// Brazilian PIX
    Pix,
    /// PIX with bank/branch/CPF details instead of a PIX key
    PixSafe,
    /// Mexican SPEI (via Bitso)
    SpeiBitso,
    /// Argentine transfers (via Bitso)
    TransfersBitso,
    /// Colombian ACH (via Bitso)
    AchCopBitso,
    /// International SWIFT transfer
    InternationalSwift,
    /// US real-time payments
    Rtp,
}

impl Rail {
    /// The rail identifier as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rail::Wire => "wire",
            Rail::Ach => "ach",
            Rail::Pix => "pix",
            Rail::PixSafe => "pix_safe",
            Rail::SpeiBitso => "spei_bitso",
            Rail::TransfersBitso => "transfers_bitso",
            Rail::AchCopBitso => "ach_cop_bitso",
            Rail::InternationalSwift => "international_swift",
            Rail::Rtp => "rtp",
        }
    }
}

impl std::fmt::Display for Rail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an account belongs to a person or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountClass {
    /// Personal account
    Individual,
    /// Company account
    Business,
}

/// US bank account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
}

/// Blockchain network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    /// Base mainnet
    Base,
    /// Ethereum Sepolia testnet
    Sepolia,
    /// Arbitrum Sepolia testnet
    ArbitrumSepolia,
    /// Base Sepolia testnet
    BaseSepolia,
    /// Arbitrum One
    Arbitrum,
    /// Polygon PoS
    Polygon,
    /// Polygon Amoy testnet
    PolygonAmoy,
    /// Ethereum mainnet
    Ethereum,
    /// Stellar mainnet
    Stellar,
    /// Stellar testnet
    StellarTestnet,
    /// Tron mainnet
    Tron,
}

/// Stablecoin used on the crypto side of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StablecoinToken {
    /// USD Coin
    Usdc,
    /// Tether
    Usdt,
    /// BlindPay test dollar
    Usdb,
}

/// Currency of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// USD Coin
    Usdc,
    /// Tether
    Usdt,
    /// BlindPay test dollar
    Usdb,
    /// Brazilian real
    Brl,
    /// US dollar
    Usd,
    /// Mexican peso
    Mxn,
    /// Colombian peso
    Cop,
    /// Argentine peso
    Ars,
}

/// Which side of a quote the requested amount is fixed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    /// The amount is what the sender pays
    Sender,
    /// The amount is what the receiver gets
    Receiver,
}

/// Supporting document attached to a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionDocumentType {
    /// Invoice
    Invoice,
    /// Purchase order
    PurchaseOrder,
    /// Delivery slip
    DeliverySlip,
    /// Contract
    Contract,
    /// Customs declaration
    CustomsDeclaration,
    /// Bill of lading
    BillOfLading,
    /// Anything else
    Others,
}

/// Cursor pagination returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    /// Whether more items exist after this page
    pub has_more: bool,
    /// Cursor for the next page
    #[serde(default)]
    pub next_page: Option<String>,
    /// Cursor for the previous page
    #[serde(default)]
    pub prev_page: Option<String>,
}

/// Pagination query parameters accepted by list endpoints.
///
/// Only the fields that are set end up in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationParams {
    /// Number of items to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Return items after this object id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Return items before this object id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

impl PaginationParams {
    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the number of items to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Continue after the given object id.
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// Continue before the given object id.
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }
}

/// `{"success": bool}` acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Whether the operation succeeded
    pub success: bool,
}

/// `{"id": ..}` returned by most create endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    /// Identifier of the created object
    pub id: String,
}

/// Payload type for endpoints that return no data.
///
/// Accepts any JSON object and ignores its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_wire_format() {
        assert_eq!(serde_json::to_string(&Country::Us).unwrap(), r#""US""#);
        let country: Country = serde_json::from_str(r#""BR""#).unwrap();
        assert_eq!(country, Country::Br);
        let country: Country = serde_json::from_str(r#""DO""#).unwrap();
        assert_eq!(country, Country::Do);
    }

    #[test]
    fn test_rail_wire_format() {
        assert_eq!(serde_json::to_string(&Rail::PixSafe).unwrap(), r#""pix_safe""#);
        assert_eq!(Rail::InternationalSwift.to_string(), "international_swift");
        let rail: Rail = serde_json::from_str(r#""ach_cop_bitso""#).unwrap();
        assert_eq!(rail, Rail::AchCopBitso);
    }

    #[test]
    fn test_network_and_token_wire_format() {
        assert_eq!(serde_json::to_string(&Network::StellarTestnet).unwrap(), r#""stellar_testnet""#);
        assert_eq!(serde_json::to_string(&StablecoinToken::Usdc).unwrap(), r#""USDC""#);
        assert_eq!(serde_json::to_string(&Currency::Brl).unwrap(), r#""BRL""#);
    }

    #[test]
    fn test_pagination_params_omit_unset() {
        let params = PaginationParams::default();
        assert_eq!(serde_urlencoded::to_string(&params).unwrap(), "");

        let params = PaginationParams::default().limit(50).starting_after("re_1");
        assert_eq!(
            serde_urlencoded::to_string(&params).unwrap(),
            "limit=50&starting_after=re_1"
        );
    }

    #[test]
    fn test_void_response_ignores_content() {
        let void: VoidResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(void, VoidResponse {});
    }
}
