use bezier_curve_editor::{
    AppCommand, AppController, AppIntent, AppState, CurvePreset, DragSession, EditorOptions,
    JointedCurve, PointerButton, Selection,
};
use bezier_curve_editor::render::{paint_scene, DrawList};
use bezier_curve_editor::shared::options::CURVE_RESOLUTION_MAX;
use glam::{Vec2, Vec3};

const VIEWPORT: [f32; 2] = [600.0, 600.0];

fn setup(preset: CurvePreset) -> (AppController, AppState) {
    let mut options = EditorOptions::default();
    options.preset = preset;
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: VIEWPORT })
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn press(controller: &mut AppController, state: &mut AppState, screen_pos: Vec2) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                screen_pos,
                button: PointerButton::Primary,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

fn move_to(controller: &mut AppController, state: &mut AppState, screen_pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerMoved { screen_pos })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller.prepare_frame(state);
}

fn release(controller: &mut AppController, state: &mut AppState, screen_pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerReleased { screen_pos })
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
}

fn projected(state: &AppState, index: usize) -> Vec2 {
    state
        .view
        .transform()
        .project(state.curve.control_points()[index])
}

fn assert_joint_invariant(state: &AppState) {
    let p = state.curve.control_points();
    let j = JointedCurve::JOINT_INDEX;
    let error = (p[j] - (p[j - 1] + p[j + 1]) * 0.5).length();
    assert!(error <= 1e-5, "Gelenk-Invariante verletzt: {error}");
}

#[test]
fn test_press_on_point_selects_it_and_eleven_px_off_rotates_camera() {
    let (mut controller, mut state) = setup(CurvePreset::Classic);
    let on_point = projected(&state, 0);

    press(&mut controller, &mut state, on_point);
    assert_eq!(state.selection(), Selection::ControlPoint(0));
    release(&mut controller, &mut state, on_point);
    assert_eq!(state.selection(), Selection::None);

    press(&mut controller, &mut state, on_point + Vec2::new(11.0, 0.0));
    assert_eq!(state.selection(), Selection::Camera);
}

#[test]
fn test_drag_commit_is_idempotent() {
    let (mut controller, mut state) = setup(CurvePreset::Classic);
    let start = projected(&state, 0);
    let target = start + Vec2::new(30.0, 15.0);

    press(&mut controller, &mut state, start);
    move_to(&mut controller, &mut state, target);
    release(&mut controller, &mut state, target);
    let after_drag = state.curve.control_points()[0];
    assert!((after_drag - Vec3::new(0.6, -0.2, 0.0)).length() < 1e-4);

    press(&mut controller, &mut state, target);
    assert_eq!(state.selection(), Selection::ControlPoint(0));
    release(&mut controller, &mut state, target);

    assert_eq!(state.curve.control_points()[0], after_drag);
}

#[test]
fn test_joint_invariant_holds_through_drag_sequence() {
    let (mut controller, mut state) = setup(CurvePreset::TwoSegment);
    let joint = state.curve.control_points()[JointedCurve::JOINT_INDEX];
    assert!((joint - Vec3::new(0.575, 0.65, 0.0)).length() < 1e-6);

    for (index, delta) in [
        (2, Vec2::new(-25.0, 40.0)),
        (3, Vec2::new(12.0, -30.0)),
        (4, Vec2::new(45.0, 10.0)),
        (3, Vec2::new(-8.0, 8.0)),
    ] {
        let start = projected(&state, index);
        press(&mut controller, &mut state, start);
        assert_eq!(state.selection(), Selection::ControlPoint(index));

        for step in 1..=4 {
            move_to(&mut controller, &mut state, start + delta * (step as f32 / 4.0));
            assert_joint_invariant(&state);
        }

        release(&mut controller, &mut state, start + delta);
        assert_joint_invariant(&state);
    }
}

#[test]
fn test_dragging_joint_carries_neighbours() {
    let (mut controller, mut state) = setup(CurvePreset::TwoSegment);
    let before = state.curve.control_points().to_vec();
    let start = projected(&state, JointedCurve::JOINT_INDEX);

    press(&mut controller, &mut state, start);
    move_to(&mut controller, &mut state, start + Vec2::new(30.0, 0.0));
    release(&mut controller, &mut state, start + Vec2::new(30.0, 0.0));

    let after = state.curve.control_points();
    let shift = Vec3::new(0.1, 0.0, 0.0);
    for index in 2..=4 {
        assert!(
            (after[index] - (before[index] + shift)).length() < 1e-4,
            "P{} nicht mitverschoben",
            index + 1
        );
    }
    assert_eq!(after[0], before[0]);
    assert_eq!(after[6], before[6]);
}

#[test]
fn test_camera_drag_commits_and_accumulates() {
    let (mut controller, mut state) = setup(CurvePreset::Classic);
    let corner = Vec2::new(5.0, 5.0);

    press(&mut controller, &mut state, corner);
    move_to(&mut controller, &mut state, corner + Vec2::new(10.0, 0.0));
    assert!((state.view.camera.rotation_new.x - 3.0).abs() < 1e-5);
    assert_eq!(state.view.camera.rotation_old, Vec2::ZERO);

    release(&mut controller, &mut state, corner + Vec2::new(10.0, 0.0));
    assert_eq!(state.view.camera.rotation_old, state.view.camera.rotation_new);

    press(&mut controller, &mut state, corner);
    move_to(&mut controller, &mut state, corner + Vec2::new(10.0, -20.0));
    release(&mut controller, &mut state, corner + Vec2::new(10.0, -20.0));

    assert!((state.view.camera.rotation_old.x - 6.0).abs() < 1e-5);
    assert!((state.view.camera.rotation_old.y + 6.0).abs() < 1e-5);
}

#[test]
fn test_secondary_press_on_point_starts_nothing() {
    let (mut controller, mut state) = setup(CurvePreset::Classic);
    let on_point = projected(&state, 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                screen_pos: on_point,
                button: PointerButton::Secondary,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.drag, DragSession::Idle);
}

#[test]
fn test_preset_switch_replaces_curve_and_logs_commands() {
    let (mut controller, mut state) = setup(CurvePreset::Classic);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PresetSelected {
                preset: CurvePreset::TwoSegment,
            },
        )
        .expect("PresetSelected sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 7);
    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::SetViewportSize { size: VIEWPORT },
            AppCommand::LoadPreset {
                preset: CurvePreset::TwoSegment
            },
        ]
    );
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = setup(CurvePreset::Classic);

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_render_scene_after_frame_preparation() {
    let (mut controller, mut state) = setup(CurvePreset::TwoSegment);
    controller.prepare_frame(&mut state);

    let scene = controller.build_render_scene(&state, VIEWPORT, 0.0);

    assert_eq!(scene.segments.len(), 2);
    assert_eq!(scene.control_points.len(), 7);
    assert!(scene.traveler.is_none());
    assert!(scene.is_drawable());
}

#[test]
fn test_hand_edited_options_file_renders_with_clamped_resolution() {
    let options = EditorOptions::from_toml(
        "preset = \"TwoSegment\"\ncurve_resolution = 4000000000000000000\nrotation_sensitivity = nan\n",
    )
    .expect("Optionen sollten trotz ungültiger Werte laden");
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: VIEWPORT })
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    controller.prepare_frame(&mut state);

    assert_eq!(state.options.curve_resolution, CURVE_RESOLUTION_MAX);
    assert!(state.options.rotation_sensitivity.is_finite());

    let scene = controller.build_render_scene(&state, VIEWPORT, 0.0);
    let mut draw_list = DrawList::new();
    paint_scene(&scene, &mut draw_list);

    // zwei Segmente mit je höchstens CURVE_RESOLUTION_MAX Linien plus Polygon und Punkte
    assert!(!draw_list.is_empty());
    assert!(draw_list.len() <= 2 * CURVE_RESOLUTION_MAX + 64);
}
