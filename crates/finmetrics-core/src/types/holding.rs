//! Portfolio holding representation.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single equity position in a portfolio.
///
/// Shares and prices are never negative. Holdings are built through
/// [`Holding::new`] or [`HoldingBuilder`], and deserialization runs the same
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HoldingData")]
pub struct Holding {
    /// Ticker symbol.
    pub ticker: String,

    /// Number of shares held.
    pub shares: Decimal,

    /// Price paid per share.
    pub purchase_price: Decimal,

    /// Latest price per share.
    pub current_price: Decimal,

    /// Sector label used for allocation grouping.
    pub sector: String,
}

/// Unvalidated holding fields, as they arrive from a serialized source.
#[derive(Debug, Clone, Deserialize)]
struct HoldingData {
    ticker: String,
    shares: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    sector: String,
}

impl TryFrom<HoldingData> for Holding {
    type Error = CoreError;

    fn try_from(data: HoldingData) -> CoreResult<Self> {
        Holding::new(
            data.ticker,
            data.shares,
            data.purchase_price,
            data.current_price,
            data.sector,
        )
    }
}

impl Holding {
    /// Creates a validated holding.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is empty or any quantity is negative.
    pub fn new(
        ticker: impl Into<String>,
        shares: Decimal,
        purchase_price: Decimal,
        current_price: Decimal,
        sector: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::builder()
            .ticker(ticker)
            .shares(shares)
            .purchase_price(purchase_price)
            .current_price(current_price)
            .sector(sector)
            .build()
    }

    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the current market value (shares × current price).
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the product exceeds the decimal range.
    pub fn market_value(&self) -> CoreResult<Decimal> {
        self.shares
            .checked_mul(self.current_price)
            .ok_or_else(|| CoreError::overflow(format!("market value of {}", self.ticker)))
    }

    /// Returns the amount originally invested (shares × purchase price).
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the product exceeds the decimal range.
    pub fn cost_basis(&self) -> CoreResult<Decimal> {
        self.shares
            .checked_mul(self.purchase_price)
            .ok_or_else(|| CoreError::overflow(format!("cost basis of {}", self.ticker)))
    }

    /// Returns the unrealized gain or loss in currency units.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if either value exceeds the decimal range.
    pub fn unrealized_gain(&self) -> CoreResult<Decimal> {
        let value = self.market_value()?;
        let cost = self.cost_basis()?;
        value
            .checked_sub(cost)
            .ok_or_else(|| CoreError::overflow(format!("gain of {}", self.ticker)))
    }
}

/// Builder for constructing a Holding.
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    ticker: Option<String>,
    shares: Option<Decimal>,
    purchase_price: Option<Decimal>,
    current_price: Option<Decimal>,
    sector: Option<String>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the share count.
    #[must_use]
    pub fn shares(mut self, shares: Decimal) -> Self {
        self.shares = Some(shares);
        self
    }

    /// Sets the purchase price per share.
    #[must_use]
    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Sets the current price per share.
    #[must_use]
    pub fn current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the sector label.
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Builds the holding.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the ticker is empty,
    /// or any quantity is negative.
    pub fn build(self) -> CoreResult<Holding> {
        let ticker = self
            .ticker
            .ok_or_else(|| CoreError::missing_field("ticker"))?;
        let shares = self
            .shares
            .ok_or_else(|| CoreError::missing_field("shares"))?;
        let purchase_price = self
            .purchase_price
            .ok_or_else(|| CoreError::missing_field("purchase_price"))?;
        let current_price = self
            .current_price
            .ok_or_else(|| CoreError::missing_field("current_price"))?;
        let sector = self
            .sector
            .ok_or_else(|| CoreError::missing_field("sector"))?;

        if ticker.trim().is_empty() {
            return Err(CoreError::invalid_holding(&ticker, "ticker cannot be empty"));
        }

        if shares < Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &ticker,
                "shares cannot be negative",
            ));
        }

        if purchase_price < Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &ticker,
                "purchase_price cannot be negative",
            ));
        }

        if current_price < Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &ticker,
                "current_price cannot be negative",
            ));
        }

        Ok(Holding {
            ticker,
            shares,
            purchase_price,
            current_price,
            sector,
        })
    }
}
