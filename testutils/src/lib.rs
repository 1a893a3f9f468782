//! Test helpers shared between the crates in the workspace.

use std::{fmt::Debug, marker::PhantomData};

use googletest::{
    description::Description,
    matcher::{Matcher, MatcherBase, MatcherResult},
};

/// Matches an [anyhow::Error] whose root error is an `E` that `inner`
/// matches.
///
/// ```ignore
/// expect_that!(result, err(anyhow_downcasts_to::<InvalidShapeError, _>(eq(expected))));
/// ```
pub fn anyhow_downcasts_to<E, M>(inner: M) -> AnyhowDowncastTo<E, M> {
    AnyhowDowncastTo {
        inner,
        phantom_e: PhantomData,
    }
}

pub struct AnyhowDowncastTo<E, M> {
    inner: M,
    phantom_e: PhantomData<E>,
}

impl<E, M> MatcherBase for AnyhowDowncastTo<E, M> {}

impl<E, M> Matcher<&anyhow::Error> for AnyhowDowncastTo<E, M>
where
    E: Copy + Debug + std::fmt::Display + Send + Sync + 'static,
    M: Matcher<E>,
{
    fn matches(&self, actual: &anyhow::Error) -> MatcherResult {
        match actual.downcast_ref::<E>() {
            Some(e) => self.inner.matches(*e),
            None => MatcherResult::NoMatch,
        }
    }

    fn explain_match(&self, actual: &anyhow::Error) -> Description {
        let type_name = std::any::type_name::<E>();
        match actual.downcast_ref::<E>() {
            Some(e) => Description::new()
                .text(format!("which is a {type_name}"))
                .nested(self.inner.explain_match(*e)),
            None => Description::new().text(format!("which is not a {type_name}: {actual:#}")),
        }
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        let type_name = std::any::type_name::<E>();
        match matcher_result {
            MatcherResult::Match => format!(
                "downcasts to {type_name} which {}",
                self.inner.describe(MatcherResult::Match)
            )
            .into(),
            MatcherResult::NoMatch => format!(
                "does not downcast to {type_name}, or downcasts to a value which {}",
                self.inner.describe(MatcherResult::NoMatch)
            )
            .into(),
        }
    }
}
