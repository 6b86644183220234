//! End-to-end binding behaviour across resolvers, targets, and derived keys.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, ensure};
use camino::Utf8Path;
use localized::{
    CatalogueResolver, ControlState, FluentResolver, Localizable, Localized,
    LocalizedConfiguration, LocalizedKey, LocalizedKeyProvider, LocalizedOptions, Scope, langid,
};
use rstest::{fixture, rstest};
use test_helpers::{Lookup, RecordingResolver, RecordingTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, LocalizedKey)]
#[localized(prefix = "Login.", rename_all = "PascalCase")]
enum LoginStrings {
    Title,
    #[localized(key = "Shared.Submit")]
    SubmitButton,
    r#Forgotten,
}

#[fixture]
fn catalogue() -> CatalogueResolver {
    CatalogueResolver::new()
        .with_entry(Scope::MAIN, None, "Login.Title", "Sign in")
        .with_entry(Scope::MAIN, None, "Shared.Submit", "Submit")
        .with_entry(Scope::MAIN, Some("AnotherFile"), "Button.Title", "Go")
        .with_entry(Scope::MAIN, Some("AnotherFile"), "Button.Selected.Title", "Going")
}

#[rstest]
fn derived_keys_follow_prefix_and_overrides() {
    assert_eq!(LoginStrings::Title.localized_key(), "Login.Title");
    assert_eq!(LoginStrings::SubmitButton.localized_key(), "Shared.Submit");
    assert_eq!(LoginStrings::r#Forgotten.localized_key(), "Login.Forgotten");
}

#[rstest]
fn derived_keys_resolve_through_a_binding(catalogue: CatalogueResolver) -> Result<()> {
    let resolver = RecordingResolver::new(catalogue);
    let mut title: Localized<RecordingTarget, LoginStrings> = Localized::with_configurations(
        [
            LocalizedConfiguration::key(LoginStrings::Title, ControlState::NORMAL),
            LocalizedConfiguration::key(LoginStrings::SubmitButton, ControlState::FOCUSED),
        ],
        LocalizedOptions::default(),
        resolver.clone(),
    );
    title.set(Some(RecordingTarget::default()));

    let target = title.get().context("title should be bound")?;
    ensure!(target.value_for(ControlState::NORMAL) == Some("Sign in"));
    ensure!(target.value_for(ControlState::FOCUSED) == Some("Submit"));
    ensure!(resolver.lookup_count() == 2);
    Ok(())
}

#[rstest]
fn heterogeneous_targets_share_one_binding(catalogue: CatalogueResolver) -> Result<()> {
    let shared = Arc::new(Mutex::new(RecordingTarget::default()));
    let mut binding: Localized<Box<dyn Localizable>> = Localized::with_configurations(
        [
            LocalizedConfiguration::key("Button.Title", ControlState::NORMAL),
            LocalizedConfiguration::key("Button.Selected.Title", ControlState::SELECTED),
        ],
        LocalizedOptions::new().with_table("AnotherFile"),
        Arc::new(catalogue),
    );

    binding.set(Some(Box::new(RecordingTarget::default())));
    binding.set(Some(Box::new(Arc::clone(&shared))));

    let target = shared
        .lock()
        .map_err(|_| anyhow::anyhow!("target mutex poisoned"))?;
    ensure!(
        target.calls()
            == [
                (String::from("Go"), ControlState::NORMAL),
                (String::from("Going"), ControlState::SELECTED),
            ]
    );
    Ok(())
}

#[rstest]
fn application_states_pass_through_untouched(catalogue: CatalogueResolver) -> Result<()> {
    let custom = ControlState::from_bits_retain(0x0001_0000);
    ensure!(ControlState::APPLICATION.contains(custom));

    let mut binding: Localized<RecordingTarget> = Localized::with_configurations(
        [LocalizedConfiguration::key("Login.Title", custom)],
        LocalizedOptions::default(),
        Arc::new(catalogue),
    );
    binding.set(Some(RecordingTarget::default()));

    let target = binding.get().context("target should be bound")?;
    ensure!(target.value_for(custom) == Some("Sign in"));
    Ok(())
}

#[rstest]
fn scoped_bindings_only_see_their_scope() -> Result<()> {
    let plugins = Scope::new("plugins");
    let resolver = RecordingResolver::new(
        CatalogueResolver::new()
            .with_entry(Scope::MAIN, None, "Label.Title", "Main")
            .with_entry(plugins.clone(), None, "Label.Title", "Plugin"),
    );
    let mut binding: Localized<RecordingTarget> = Localized::new(
        "Label.Title",
        LocalizedOptions::new().with_scope(plugins.clone()),
        resolver.clone(),
    );
    binding.set(Some(RecordingTarget::default()));

    let target = binding.get().context("target should be bound")?;
    ensure!(target.value_for(ControlState::NORMAL) == Some("Plugin"));
    ensure!(
        resolver.lookups()
            == [Lookup {
                key: String::from("Label.Title"),
                table: None,
                scope: plugins,
            }]
    );
    Ok(())
}

#[rstest]
fn fluent_tables_on_disk_drive_bindings() -> Result<()> {
    let temp = tempfile::tempdir().context("create temp dir")?;
    let dir = Utf8Path::from_path(temp.path()).context("temp dir should be UTF-8")?;
    std::fs::write(dir.join("Localizable.ftl"), "Login.Title = Accedi\n")?;
    std::fs::write(
        dir.join("AnotherFile.ftl"),
        "Button.Title = Vai\nButton.Selected.Title = In corso\n",
    )?;
    std::fs::write(dir.join("notes.txt"), "ignored")?;

    let resolver = Arc::new(
        FluentResolver::builder(langid!("it"))
            .with_table_dir(Scope::MAIN, dir.to_owned())
            .try_build()?,
    );

    let mut title: Localized<RecordingTarget, LoginStrings> = Localized::new(
        LoginStrings::Title,
        LocalizedOptions::default(),
        resolver.clone(),
    );
    let mut button: Localized<RecordingTarget> = Localized::with_configurations(
        [
            LocalizedConfiguration::key("Button.Title", ControlState::NORMAL),
            LocalizedConfiguration::key("Button.Selected.Title", ControlState::SELECTED),
        ],
        LocalizedOptions::new().with_table("AnotherFile"),
        resolver,
    );
    title.set(Some(RecordingTarget::default()));
    button.set(Some(RecordingTarget::default()));

    let title_target = title.get().context("title should be bound")?;
    let button_target = button.get().context("button should be bound")?;
    ensure!(title_target.value_for(ControlState::NORMAL) == Some("Accedi"));
    ensure!(button_target.value_for(ControlState::NORMAL) == Some("Vai"));
    ensure!(button_target.value_for(ControlState::SELECTED) == Some("In corso"));
    Ok(())
}
