//! Filter interfaces consumed by parsed route definitions
//!
//! Filters are instantiated from a [`Spec`] with the arguments written in the
//! route, and run in two phases per request. Anything a filter needs to carry
//! from the request phase to the response phase goes into the request's
//! [`StateBag`].

pub mod chain;

use serde_json::Value;
use std::collections::HashMap;

use crate::error::FilterError;
use crate::lexer::Literal;

pub use chain::{Chain, ChainSpec};

/// Request-scoped key-value store shared by the filters of one request
pub type StateBag = HashMap<String, Value>;

/// Argument of a filter call in a route definition
#[derive(Debug, Clone, PartialEq)]
pub enum FilterArg {
    Number(f64),
    String(String),
}

impl From<Literal> for FilterArg {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(n) => FilterArg::Number(n),
            Literal::Raw(s) | Literal::Text(s) => FilterArg::String(s),
        }
    }
}

/// View of the request being processed
pub trait FilterContext {
    /// Whether a response has already been produced for the request
    fn served(&self) -> bool;

    /// Mark the request as served
    fn serve(&mut self);

    fn state_bag(&self) -> &StateBag;

    fn state_bag_mut(&mut self) -> &mut StateBag;
}

pub trait Filter: Send + Sync {
    fn request(&self, ctx: &mut dyn FilterContext);

    fn response(&self, ctx: &mut dyn FilterContext);
}

/// Named factory of filters
pub trait Spec: Send + Sync {
    fn name(&self) -> &str;

    fn create_filter(&self, args: &[FilterArg]) -> Result<Box<dyn Filter>, FilterError>;
}

/// Plain [`FilterContext`] holding only the served flag and the state bag
#[derive(Debug, Default)]
pub struct RequestContext {
    served: bool,
    state_bag: StateBag,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterContext for RequestContext {
    fn served(&self) -> bool {
        self.served
    }

    fn serve(&mut self) {
        self.served = true;
    }

    fn state_bag(&self) -> &StateBag {
        &self.state_bag
    }

    fn state_bag_mut(&mut self) -> &mut StateBag {
        &mut self.state_bag
    }
}
