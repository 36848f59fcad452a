//! Merge freshly derived signature data with a previously authored block.
//!
//! Precedence favors human-authored content: a documented parameter wins
//! wholesale over fresh inference, and a documented return tag survives
//! untouched unless its type was still the placeholder. The current code
//! signature stays authoritative for which parameters exist and in what
//! order, and for whether a return line appears at all.

use crate::model::{DocTags, Parameter, Returns, Signature, TYPE_PLACEHOLDER};
use std::collections::HashMap;

/// Merge prior tags into a fresh signature.
pub fn merge(mut fresh: Signature, prior: DocTags) -> Signature {
    if !prior.description.is_empty() {
        fresh.description = Some(prior.description);
    }

    let mut by_title: HashMap<String, Parameter> = prior
        .parameters
        .into_iter()
        .map(|p| (p.title.clone(), p))
        .collect();

    // A title match replaces the entire freshly inferred parameter; prior
    // parameters with no current counterpart are dropped with the map.
    for param in &mut fresh.parameters {
        if let Some(documented) = by_title.remove(&param.title) {
            *param = documented;
        }
    }

    if fresh.returns.present {
        if let Some(documented) = prior.returns {
            if documented.type_.as_deref() == Some(TYPE_PLACEHOLDER) {
                // Placeholder type: keep the authored description, accept a
                // fresh type when inference produced one.
                fresh.returns = Returns {
                    present: true,
                    type_: fresh.returns.type_,
                    description: documented.description,
                };
            } else {
                fresh.returns = Returns {
                    present: true,
                    ..documented
                };
            }
        }
    } else {
        // No detected return value: stale return tags are dropped.
        fresh.returns = Returns::default();
    }

    fresh
}
