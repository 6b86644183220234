//! Binds the binding feature file to the step registry.

use crate::fixtures::{BindingContext, binding_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/binding.feature",
    fixtures = [binding_context: BindingContext]
);
