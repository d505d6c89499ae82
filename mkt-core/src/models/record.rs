/// A prospective buyer and the most they will pay for one unit
///
/// Construct with [`Buyer::new`] (or deserialize) to guarantee a finite price.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BuyerDto", into = "BuyerDto")
)]
pub struct Buyer {
    name: Option<String>,
    willingness_to_pay: f64,
}

impl Buyer {
    /// Creates a new buyer, validating the price
    pub fn new(name: Option<String>, willingness_to_pay: f64) -> Result<Self, RecordError> {
        Self::try_from(BuyerDto {
            name,
            willingness_to_pay,
        })
    }

    /// The buyer's label, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The maximum price this buyer will accept
    pub fn willingness_to_pay(&self) -> f64 {
        self.willingness_to_pay
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct BuyerDto {
    /// An optional label for the buyer
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// The maximum price the buyer will pay (finite)
    pub willingness_to_pay: f64,
}

impl TryFrom<BuyerDto> for Buyer {
    type Error = RecordError;

    fn try_from(value: BuyerDto) -> Result<Self, Self::Error> {
        if !value.willingness_to_pay.is_finite() {
            return Err(RecordError::NonFinitePrice(value.willingness_to_pay));
        }
        Ok(Self {
            name: value.name,
            willingness_to_pay: value.willingness_to_pay,
        })
    }
}

impl From<Buyer> for BuyerDto {
    fn from(value: Buyer) -> Self {
        Self {
            name: value.name,
            willingness_to_pay: value.willingness_to_pay,
        }
    }
}

/// A prospective seller, with an amount to sell and the minimum acceptable price
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SellerDto", into = "SellerDto")
)]
pub struct Seller {
    name: Option<String>,
    tons_to_sell: f64,
    cost_to_sell: f64,
}

impl Seller {
    /// Creates a new seller, validating the quantity and cost
    pub fn new(
        name: Option<String>,
        tons_to_sell: f64,
        cost_to_sell: f64,
    ) -> Result<Self, RecordError> {
        Self::try_from(SellerDto {
            name,
            tons_to_sell,
            cost_to_sell,
        })
    }

    /// The seller's label, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The quantity this seller offers
    pub fn tons_to_sell(&self) -> f64 {
        self.tons_to_sell
    }

    /// The minimum price this seller requires per unit
    pub fn cost_to_sell(&self) -> f64 {
        self.cost_to_sell
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct SellerDto {
    /// An optional label for the seller
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// The quantity offered (finite, nonnegative)
    pub tons_to_sell: f64,
    /// The minimum acceptable price (finite)
    pub cost_to_sell: f64,
}

impl TryFrom<SellerDto> for Seller {
    type Error = RecordError;

    fn try_from(value: SellerDto) -> Result<Self, Self::Error> {
        if !value.tons_to_sell.is_finite() || value.tons_to_sell < 0.0 {
            return Err(RecordError::InvalidQuantity(value.tons_to_sell));
        }
        if !value.cost_to_sell.is_finite() {
            return Err(RecordError::NonFinitePrice(value.cost_to_sell));
        }
        Ok(Self {
            name: value.name,
            tons_to_sell: value.tons_to_sell,
            cost_to_sell: value.cost_to_sell,
        })
    }
}

impl From<Seller> for SellerDto {
    fn from(value: Seller) -> Self {
        Self {
            name: value.name,
            tons_to_sell: value.tons_to_sell,
            cost_to_sell: value.cost_to_sell,
        }
    }
}

/// The raw tabular input to an analysis: one table of buyers, one of sellers
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketData {
    /// The demand side of the market
    pub buyers: Vec<Buyer>,
    /// The supply side of the market
    pub sellers: Vec<Seller>,
}

/// Errors that can occur when creating or validating a buyer or seller record
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Error when a price (willingness to pay or cost to sell) is NaN or infinite
    #[error("price must be finite, got {0}")]
    NonFinitePrice(f64),
    /// Error when a seller's quantity is negative, NaN, or infinite
    #[error("quantity must be finite and nonnegative, got {0}")]
    InvalidQuantity(f64),
}
