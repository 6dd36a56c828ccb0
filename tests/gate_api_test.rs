//! Integration tests for the presence gate and install plans.

use depgate::gate::{
    ApplyOutcome, DependencySpec, DependencyState, InstallerPayload, MockLauncher, PresenceCheck,
    PresenceGate,
};
use depgate::plan::InstallPlan;
use depgate::registration::{MemoryRegistry, RegistryKeyRef};
use depgate::GateError;

const KEY: &str = "Vendor\\Product\\10.0";

fn product_spec() -> DependencySpec {
    DependencySpec::new(
        "Vendor/Product/10.0",
        PresenceCheck::registry(RegistryKeyRef::local_machine(KEY)),
        InstallerPayload::new("product-setup.exe", vec!["/SILENT".into()]),
    )
}

#[test]
fn missing_key_installs_silently() {
    let store = MemoryRegistry::new();
    let launcher = MockLauncher::new();
    launcher.queue_exit_code(Some(0));
    let gate = PresenceGate::new(&store, &launcher);
    let spec = product_spec();

    assert!(!gate.is_satisfied(&spec));

    let outcome = gate.apply(&spec).unwrap();
    assert!(matches!(outcome, ApplyOutcome::Installed { .. }));
    assert_eq!(outcome.state(), DependencyState::Installed);

    let launches = launcher.launches();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].args, vec!["/SILENT".to_string()]);
}

#[test]
fn present_key_skips_without_spawning() {
    let store = MemoryRegistry::new().with_key(RegistryKeyRef::local_machine(KEY));
    let launcher = MockLauncher::new();
    let gate = PresenceGate::new(&store, &launcher);
    let spec = product_spec();

    assert!(gate.is_satisfied(&spec));
    let outcome = gate.apply(&spec).unwrap();
    assert_eq!(outcome.state(), DependencyState::Skipped);
    assert_eq!(launcher.launch_count(), 0);
}

#[test]
fn failed_install_is_reported_and_plan_continues() {
    let store = MemoryRegistry::new();
    let launcher = MockLauncher::new();
    launcher.queue_exit_code(Some(1));
    let gate = PresenceGate::new(&store, &launcher);

    let err = gate.apply(&product_spec()).unwrap_err();
    assert!(matches!(
        err,
        GateError::DependencyInstallFailed { code: Some(1), .. }
    ));

    let launcher = MockLauncher::new();
    launcher.queue_exit_code(Some(1));
    let gate = PresenceGate::new(&store, &launcher);
    let second = DependencySpec::new(
        "Other/Tool/2.0",
        PresenceCheck::registry(RegistryKeyRef::local_machine("Other\\Tool\\2.0")),
        InstallerPayload::new("tool-setup.exe", vec!["/S".into()]),
    );
    let report = InstallPlan::new(vec![product_spec(), second]).run(&gate);

    assert_eq!(report.entries[0].state, DependencyState::Failed);
    assert_eq!(report.entries[1].state, DependencyState::Installed);
    assert_eq!(launcher.launch_count(), 2);
}

#[test]
fn is_satisfied_is_idempotent() {
    let store = MemoryRegistry::new().with_key(RegistryKeyRef::local_machine(KEY));
    let launcher = MockLauncher::new();
    let gate = PresenceGate::new(&store, &launcher);
    let spec = product_spec();
    assert_eq!(gate.is_satisfied(&spec), gate.is_satisfied(&spec));
}

#[test]
fn unreadable_store_attempts_install() {
    let store = MemoryRegistry::failing();
    let launcher = MockLauncher::new();
    let gate = PresenceGate::new(&store, &launcher);
    let outcome = gate.apply(&product_spec()).unwrap();
    assert_eq!(outcome.state(), DependencyState::Installed);
    assert_eq!(launcher.launch_count(), 1);
}

#[test]
fn state_machine_matches_apply_outcomes() {
    let state = DependencyState::Unevaluated.checked(false).unwrap();
    assert_eq!(state.installed(true), Some(DependencyState::Installed));
    assert_eq!(state.installed(false), Some(DependencyState::Failed));

    let state = DependencyState::Unevaluated.checked(true).unwrap();
    assert_eq!(state.skipped(), Some(DependencyState::Skipped));
}

#[cfg(unix)]
#[test]
fn real_process_failure_is_reported() {
    use depgate::gate::ProcessLauncher;

    let store = MemoryRegistry::new();
    let launcher = ProcessLauncher;
    let gate = PresenceGate::new(&store, &launcher);
    let spec = DependencySpec::new(
        "Vendor/Product/10.0",
        PresenceCheck::registry(RegistryKeyRef::local_machine(KEY)),
        InstallerPayload::new("sh", vec!["-c".into(), "exit 1".into()]),
    );

    let report = InstallPlan::new(vec![spec]).run(&gate);
    assert_eq!(report.entries[0].state, DependencyState::Failed);
    assert_eq!(report.entries[0].exit_code, Some(1));
}
