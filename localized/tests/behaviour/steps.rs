//! Steps exercising bindings against a recording resolver.

use anyhow::{Result, anyhow, ensure};
use localized::{ControlState, Localized, LocalizedConfiguration, LocalizedOptions, Scope};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::parse_state;
use test_helpers::{RecordingResolver, RecordingTarget};

use crate::fixtures::BindingContext;

fn state_named(name: &str) -> Result<ControlState> {
    parse_state(name).ok_or_else(|| anyhow!("unknown control state {name:?}"))
}

fn add_entry(context: &BindingContext, table: Option<&str>, key: String, value: String) {
    let mut catalogue = context.catalogue.take().unwrap_or_default();
    catalogue.insert(Scope::MAIN, table, key, value);
    context.catalogue.set(catalogue);
}

fn bind(context: &BindingContext, item: Option<RecordingTarget>) {
    let resolver = RecordingResolver::new(context.catalogue.take().unwrap_or_default());
    let mut binding: Localized<RecordingTarget, String> = Localized::with_configurations(
        context.configurations.take().unwrap_or_default(),
        context.options.take().unwrap_or_default(),
        resolver.clone(),
    );
    binding.set(item);
    context.item.set(binding.take());
    context.resolver.set(resolver);
}

#[given("the primary table maps {key} to {value}")]
fn primary_entry(binding_context: &BindingContext, key: String, value: String) {
    add_entry(binding_context, None, key, value);
}

#[given("table {table} maps {key} to {value}")]
fn named_entry(binding_context: &BindingContext, table: String, key: String, value: String) {
    add_entry(binding_context, Some(&table), key, value);
}

#[given("the binding reads from table {table}")]
fn binding_table(binding_context: &BindingContext, table: String) -> Result<()> {
    ensure!(
        binding_context.options.is_empty(),
        "binding options already initialised"
    );
    binding_context
        .options
        .set(LocalizedOptions::new().with_table(table));
    Ok(())
}

#[given("a configuration for {key} in state {state}")]
fn configuration(binding_context: &BindingContext, key: String, state: String) -> Result<()> {
    let control_state = state_named(&state)?;
    let mut configurations = binding_context.configurations.take().unwrap_or_default();
    configurations.push(LocalizedConfiguration::key(key, control_state));
    binding_context.configurations.set(configurations);
    Ok(())
}

#[when("an item is assigned to the binding")]
fn assign_item(binding_context: &BindingContext) {
    bind(binding_context, Some(RecordingTarget::default()));
}

#[when("the binding is cleared")]
fn clear_binding(binding_context: &BindingContext) {
    bind(binding_context, None);
}

#[then("the item shows {value} in state {state}")]
fn item_shows(binding_context: &BindingContext, value: String, state: String) -> Result<()> {
    let control_state = state_named(&state)?;
    let shown = binding_context
        .item
        .with_ref(|item| {
            item.as_ref()
                .and_then(|target| target.value_for(control_state))
                .map(str::to_owned)
        })
        .ok_or_else(|| anyhow!("the binding step has not run"))?;
    ensure!(
        shown.as_deref() == Some(value.as_str()),
        "item shows {shown:?} in state {state}; expected {value:?}"
    );
    Ok(())
}

#[then("the item received {count:usize} strings")]
fn item_received(binding_context: &BindingContext, count: usize) -> Result<()> {
    let received = binding_context
        .item
        .with_ref(|item| item.as_ref().map(|target| target.calls().len()))
        .flatten()
        .ok_or_else(|| anyhow!("expected a bound item"))?;
    ensure!(
        received == count,
        "item received {received} strings; expected {count}"
    );
    Ok(())
}

#[then("no item is bound")]
fn no_item(binding_context: &BindingContext) -> Result<()> {
    let unbound = binding_context
        .item
        .with_ref(Option::is_none)
        .ok_or_else(|| anyhow!("the binding step has not run"))?;
    ensure!(unbound, "expected the binding to hold no item");
    Ok(())
}

#[then("the resolver saw {count:usize} lookups")]
fn resolver_saw(binding_context: &BindingContext, count: usize) -> Result<()> {
    let seen = binding_context
        .resolver
        .with_ref(|resolver| resolver.lookup_count())
        .ok_or_else(|| anyhow!("the binding step has not run"))?;
    ensure!(seen == count, "resolver saw {seen} lookups; expected {count}");
    Ok(())
}
