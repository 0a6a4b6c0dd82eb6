//! Command layer: every user action the desktop shell can trigger.
//!
//! Errors are flattened to strings for display.

use std::path::{Path, PathBuf};

use serde::Serialize;

use carepath_bedrock::generate::{BedrockGenerator, TextGenerator, generate_wellness_plan};
use carepath_core::models::entry::ArchiveEntry;
use carepath_core::models::role::Role;
use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;
use carepath_export::compose::{CombinedDocument, PrescriptionDetails};
use carepath_export::docx::generate_docx;
use carepath_export::output::{export_file_name, write_export};
use carepath_export::render::render_prescription;
use carepath_export::styles::DocumentStyles;
use carepath_screens::layout::Section;
use carepath_storage::store::KeyValueStore;
use carepath_wizard::sequencer::Step;
use carepath_wizard::session::Session;

use crate::config::{ConfigInfo, config_info};
use crate::state::DesktopState;

#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub id: ScreenId,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub role: Role,
    pub modules: Vec<ModuleSummary>,
    pub recent: Vec<ArchiveEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenView {
    pub id: ScreenId,
    pub title: String,
    pub instructions: Option<String>,
    pub read_only: bool,
    pub sections: Vec<Section>,
    pub selections: SelectionState,
    /// Live synthesis preview.
    pub synthesis: String,
    /// "Phase N of M" while a guided sequence runs.
    pub progress: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalizeView {
    pub entry: ArchiveEntry,
    /// The screen the wizard moved on to.
    pub next: Option<ScreenView>,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanStatus {
    pub open: bool,
    pub pending: bool,
    pub result: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveView {
    pub entries: Vec<ArchiveEntry>,
    pub selected: Option<ArchiveEntry>,
}

fn dashboard_view<S: KeyValueStore>(session: &Session<S>) -> DashboardView {
    DashboardView {
        role: session.role(),
        modules: session
            .role()
            .sequence()
            .iter()
            .map(|&id| ModuleSummary {
                id,
                title: carepath_screens::screen(id).title().to_string(),
            })
            .collect(),
        recent: session.recent_entries().into_iter().cloned().collect(),
    }
}

fn screen_view<S: KeyValueStore>(session: &Session<S>) -> Result<ScreenView, String> {
    let id = session
        .active_screen()
        .ok_or_else(|| "no screen is active".to_string())?;
    let screen = carepath_screens::screen(id);
    let selections = session.current_selections().cloned().unwrap_or_default();
    Ok(ScreenView {
        id,
        title: screen.title().to_string(),
        instructions: screen.instructions().map(str::to_string),
        read_only: screen.read_only(),
        sections: screen.sections().to_vec(),
        synthesis: screen.synthesize(&selections),
        selections,
        progress: session.progress(),
    })
}

fn archive_view<S: KeyValueStore>(session: &Session<S>) -> ArchiveView {
    ArchiveView {
        entries: session.archive().entries().to_vec(),
        selected: session.selected_entry().cloned(),
    }
}

fn prescription_details(
    clinic_name: &str,
    patient_name: &str,
    clinician_name: &str,
) -> Result<PrescriptionDetails, String> {
    if patient_name.trim().is_empty() || clinician_name.trim().is_empty() {
        return Err("patient and clinician names are required".to_string());
    }
    Ok(PrescriptionDetails {
        patient_name: patient_name.trim().to_string(),
        clinician_name: clinician_name.trim().to_string(),
        clinic_name: clinic_name.to_string(),
    })
}

pub fn get_config<S: KeyValueStore>(state: &DesktopState<S>) -> ConfigInfo {
    config_info(&state.config)
}

pub async fn choose_role<S: KeyValueStore>(
    state: &DesktopState<S>,
    role: &str,
) -> Result<DashboardView, String> {
    let role: Role = role.parse().map_err(|e| format!("{e}"))?;
    if role == Role::None {
        return Err("choose a role".to_string());
    }
    let mut session = state.session.lock().await;
    session.select_role(role);
    Ok(dashboard_view(&session))
}

pub async fn switch_role<S: KeyValueStore>(state: &DesktopState<S>) {
    state.session.lock().await.reset_role();
}

pub async fn dashboard<S: KeyValueStore>(state: &DesktopState<S>) -> DashboardView {
    dashboard_view(&*state.session.lock().await)
}

pub async fn start_wizard<S: KeyValueStore>(state: &DesktopState<S>) -> Result<ScreenView, String> {
    let mut session = state.session.lock().await;
    session.start_wizard().map_err(|e| e.to_string())?;
    screen_view(&session)
}

pub async fn open_screen<S: KeyValueStore>(
    state: &DesktopState<S>,
    id: &str,
) -> Result<ScreenView, String> {
    let id: ScreenId = id.parse().map_err(|e| format!("{e}"))?;
    let mut session = state.session.lock().await;
    session.open_screen(id).map_err(|e| e.to_string())?;
    screen_view(&session)
}

pub async fn toggle_option<S: KeyValueStore>(
    state: &DesktopState<S>,
    category: &str,
    value: &str,
) -> Result<ScreenView, String> {
    let mut session = state.session.lock().await;
    session
        .select(category, value)
        .map_err(|e| e.to_string())?;
    screen_view(&session)
}

pub async fn finalize_screen<S: KeyValueStore>(
    state: &DesktopState<S>,
) -> Result<FinalizeView, String> {
    let mut session = state.session.lock().await;
    let finalized = session.finalize().map_err(|e| e.to_string())?;
    let next = match finalized.step {
        Some(Step::Next(_)) => Some(screen_view(&session)?),
        _ => None,
    };
    Ok(FinalizeView {
        entry: finalized.entry,
        next,
        complete: finalized.step == Some(Step::Complete),
    })
}

pub async fn back_to_dashboard<S: KeyValueStore>(state: &DesktopState<S>) -> DashboardView {
    let mut session = state.session.lock().await;
    session.back_to_dashboard();
    dashboard_view(&session)
}

pub async fn open_archive<S: KeyValueStore>(
    state: &DesktopState<S>,
    selected: Option<String>,
) -> ArchiveView {
    let mut session = state.session.lock().await;
    session.open_archive(selected);
    archive_view(&session)
}

/// Pick up archive writes made through other handles.
pub async fn refresh<S: KeyValueStore>(state: &DesktopState<S>) -> bool {
    state.session.lock().await.poll_storage_changes()
}

pub async fn preview_prescription<S: KeyValueStore>(
    state: &DesktopState<S>,
    patient_name: &str,
    clinician_name: &str,
) -> Result<CombinedDocument, String> {
    let details = prescription_details(&state.config.clinic_name, patient_name, clinician_name)?;
    let session = state.session.lock().await;
    Ok(session.combined_document(&details, &jiff::Zoned::now()))
}

/// Render the combined prescription to DOCX in `dir`.
pub async fn export_prescription<S: KeyValueStore>(
    state: &DesktopState<S>,
    patient_name: &str,
    clinician_name: &str,
    dir: &Path,
) -> Result<PathBuf, String> {
    let document = preview_prescription(state, patient_name, clinician_name).await?;
    let rendered = render_prescription(&document).map_err(|e| e.to_string())?;
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).map_err(|e| e.to_string())?;
    write_export(dir, &export_file_name(patient_name, "docx"), &bytes).map_err(|e| e.to_string())
}

pub async fn open_generator<S: KeyValueStore>(state: &DesktopState<S>) {
    state.generator.lock().await.open();
}

pub async fn close_generator<S: KeyValueStore>(state: &DesktopState<S>) {
    state.generator.lock().await.close();
}

pub async fn plan_status<S: KeyValueStore>(state: &DesktopState<S>) -> PlanStatus {
    let view = state.generator.lock().await;
    PlanStatus {
        open: view.is_open(),
        pending: view.is_pending(),
        result: view.result().map(str::to_string),
    }
}

/// Discard the drafted plan and return to the input form.
pub async fn back_to_input<S: KeyValueStore>(state: &DesktopState<S>) -> PlanStatus {
    state.generator.lock().await.clear_result();
    plan_status(state).await
}

/// Draft a wellness plan with Bedrock in the configured region.
pub async fn generate_plan<S: KeyValueStore>(
    state: &DesktopState<S>,
    patient_needs: &str,
) -> Result<Option<String>, String> {
    let sdk = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(state.config.region.clone()))
        .load()
        .await;
    let generator = BedrockGenerator::new(&sdk, state.config.model_id.clone());
    tracing::info!(model = generator.model_id(), "drafting wellness plan");
    generate_plan_with(state, &generator, patient_needs).await
}

/// Draft a plan with `generator`. `Ok(None)` when the panel was closed or a
/// newer request superseded this one before the answer arrived.
pub async fn generate_plan_with<S: KeyValueStore, G: TextGenerator>(
    state: &DesktopState<S>,
    generator: &G,
    patient_needs: &str,
) -> Result<Option<String>, String> {
    if patient_needs.trim().is_empty() {
        return Err("describe the patient's needs first".to_string());
    }
    let ticket = state
        .generator
        .lock()
        .await
        .request()
        .ok_or_else(|| "the generator is closed".to_string())?;

    let plan = generate_wellness_plan(generator, patient_needs)
        .await
        .map_err(|e| e.to_string())?;

    let mut view = state.generator.lock().await;
    if view.deliver(ticket, plan) {
        Ok(view.result().map(str::to_string))
    } else {
        Ok(None)
    }
}
