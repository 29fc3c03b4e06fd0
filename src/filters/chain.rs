//! Composition of several filters into one

use log::debug;
use serde_json::Value;
use std::sync::Arc;

use super::{Filter, FilterArg, FilterContext, Spec};
use crate::error::FilterError;

/// Spec of a filter that runs a fixed list of child filters in order
pub struct ChainSpec {
    name: String,
    children: Arc<[Arc<dyn Spec>]>,
}

impl ChainSpec {
    pub fn new(name: impl Into<String>, children: Vec<Arc<dyn Spec>>) -> Self {
        Self {
            name: name.into(),
            children: children.into(),
        }
    }

    pub fn children(&self) -> &[Arc<dyn Spec>] {
        &self.children
    }

    /// State bag key recording which child served the request
    pub fn exit_key(&self) -> String {
        format!("chain.{}.exitIndex", self.name)
    }
}

impl Spec for ChainSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_filter(&self, args: &[FilterArg]) -> Result<Box<dyn Filter>, FilterError> {
        if !args.is_empty() {
            return Err(FilterError::UnexpectedArguments {
                name: self.name.clone(),
                count: args.len(),
            });
        }

        let filters = self
            .children
            .iter()
            .map(|child| {
                child
                    .create_filter(&[])
                    .map_err(|source| FilterError::Child {
                        chain: self.name.clone(),
                        child: child.name().to_owned(),
                        source: Box::new(source),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Box::new(Chain {
            exit_key: self.exit_key(),
            filters,
        }))
    }
}

/// Filter instance created by [`ChainSpec`]
pub struct Chain {
    exit_key: String,
    filters: Vec<Box<dyn Filter>>,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of children whose request phase ran for this request
    fn executed(&self, ctx: &dyn FilterContext) -> usize {
        ctx.state_bag()
            .get(&self.exit_key)
            .and_then(Value::as_u64)
            .map_or(self.filters.len(), |index| index as usize + 1)
            .min(self.filters.len())
    }
}

impl Filter for Chain {
    fn request(&self, ctx: &mut dyn FilterContext) {
        for (index, filter) in self.filters.iter().enumerate() {
            filter.request(ctx);
            if ctx.served() {
                debug!("{}: request served by child {}", self.exit_key, index);
                ctx.state_bag_mut()
                    .insert(self.exit_key.clone(), Value::from(index));
                return;
            }
        }
    }

    fn response(&self, ctx: &mut dyn FilterContext) {
        let executed = self.executed(ctx);
        for filter in &self.filters[..executed] {
            filter.response(ctx);
        }
    }
}
