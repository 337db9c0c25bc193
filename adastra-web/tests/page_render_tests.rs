use adastra_sim::{
    DockingImpulse, DockingState, InteriorState, LaunchState, MissionState, TaskId, UserChoice,
};
use adastra_web::pages::cupola::{CupolaPage, CupolaPageProps};
use adastra_web::pages::docking::{DockingPage, DockingPageProps};
use adastra_web::pages::interior::{InteriorPage, InteriorPageProps};
use adastra_web::pages::landing::{LandingPage, LandingPageProps};
use adastra_web::pages::launch::{LaunchPage, LaunchPageProps};
use adastra_web::pages::nbl::{NblPage, NblPageProps};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

#[test]
fn landing_offers_both_branches() {
    let props = LandingPageProps {
        on_choose: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
    assert!(html.contains("choose-astronaut"));
    assert!(html.contains("choose-observer"));
    assert!(html.contains("Ad Astra"));
}

fn nbl_props(nbl: adastra_sim::NblState) -> NblPageProps {
    NblPageProps {
        nbl,
        on_begin: Callback::noop(),
        on_skip: Callback::noop(),
        on_toggle_part: Callback::noop(),
        on_set_level: Callback::noop(),
        on_continue: Callback::noop(),
        on_adjust: Callback::noop(),
        on_complete: Callback::noop(),
    }
}

#[test]
fn nbl_page_tracks_sub_steps() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();

    let html = block_on(
        LocalServerRenderer::<NblPage>::with_props(nbl_props(mission.nbl.clone())).render(),
    );
    assert!(html.contains("nbl-begin"));
    assert!(html.contains("nbl-skip"));

    mission.begin_training();
    let html = block_on(
        LocalServerRenderer::<NblPage>::with_props(nbl_props(mission.nbl.clone())).render(),
    );
    assert!(html.contains("suit-helmet"));
    assert!(html.contains("suit-boots"));

    mission.skip_to_challenge();
    let html = block_on(
        LocalServerRenderer::<NblPage>::with_props(nbl_props(mission.nbl.clone())).render(),
    );
    assert!(html.contains("weight-plus-chest"));
    assert!(html.contains("200 kg"));
}

#[test]
fn nbl_complete_shows_frozen_score() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    mission.skip_to_challenge();
    mission.adjust_weight(adastra_sim::WeightQuadrant::Chest, 5);
    mission.advance(2_000);
    assert!(mission.nbl.task_completed);

    let html = block_on(
        LocalServerRenderer::<NblPage>::with_props(nbl_props(mission.nbl.clone())).render(),
    );
    assert!(html.contains("nbl-complete"));
    assert!(html.contains("100%"));
}

#[test]
fn launch_page_follows_the_sequence() {
    let launch = LaunchState::default();
    let props = LaunchPageProps {
        launch,
        on_start: Callback::noop(),
        on_complete: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LaunchPage>::with_props(props).render());
    assert!(html.contains("launch-start"));

    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    mission.complete_nbl().unwrap();
    mission.start_countdown();
    mission.advance(10_000);
    mission.advance(2_500);
    let props = LaunchPageProps {
        launch: mission.launch,
        on_start: Callback::noop(),
        on_complete: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LaunchPage>::with_props(props).render());
    assert!(html.contains("Altitude"));
    assert!(html.contains("200 km"));

    mission.advance(2_500);
    let props = LaunchPageProps {
        launch: mission.launch,
        on_start: Callback::noop(),
        on_complete: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LaunchPage>::with_props(props).render());
    assert!(html.contains("launch-complete"));
}

#[test]
fn docking_page_shows_approach_then_controls() {
    let props = DockingPageProps {
        docking: DockingState::default(),
        on_impulse: Callback::noop(),
        on_complete: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DockingPage>::with_props(props).render());
    assert!(html.contains("1000 m"));

    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    mission.complete_nbl().unwrap();
    mission.complete_launch().unwrap();
    for _ in 0..95 {
        mission.advance(200);
    }
    let docking = mission.docking;
    let props = DockingPageProps {
        docking,
        on_impulse: Callback::noop(),
        on_complete: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DockingPage>::with_props(props).render());
    for impulse in DockingImpulse::ALL {
        assert!(html.contains(&format!("rcs-{}", impulse.as_str())));
    }
}

#[test]
fn interior_page_lists_all_tasks() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    mission.complete_nbl().unwrap();
    mission.complete_launch().unwrap();
    mission.complete_docking().unwrap();
    mission.advance(4_000);

    let props = InteriorPageProps {
        interior: mission.interior,
        on_select: Callback::noop(),
        on_cancel: Callback::noop(),
        on_complete_task: Callback::noop(),
        on_continue: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<InteriorPage>::with_props(props).render());
    for task in TaskId::ALL {
        assert!(html.contains(&format!("task-{task}")));
    }
    assert!(html.contains("0/3"));

    mission.select_task(TaskId::Repair);
    let props = InteriorPageProps {
        interior: mission.interior,
        on_select: Callback::noop(),
        on_cancel: Callback::noop(),
        on_complete_task: Callback::noop(),
        on_continue: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<InteriorPage>::with_props(props).render());
    assert!(html.contains("task-complete"));
    assert!(html.contains("task-cancel"));
}

#[test]
fn cupola_congratulates_astronauts_only() {
    let mut mission = MissionState::default();
    mission.choose_observer().unwrap();
    let props = CupolaPageProps {
        cupola: mission.cupola,
        choice: mission.choice,
        on_set_view: Callback::noop(),
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CupolaPage>::with_props(props).render());
    assert!(html.contains("Pacific Ocean"));
    assert!(html.contains("view-sunrise"));
    assert!(!html.contains("congrats"));

    let props = CupolaPageProps {
        cupola: mission.cupola,
        choice: Some(UserChoice::Astronaut),
        on_set_view: Callback::noop(),
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CupolaPage>::with_props(props).render());
    assert!(html.contains("congrats"));
}

#[test]
fn app_boots_on_the_landing_page() {
    let html = block_on(LocalServerRenderer::<adastra_web::app::App>::new().render());
    assert!(html.contains("Mission Start"));
    assert!(html.contains("choose-astronaut"));
    assert!(html.contains("0%"));
}

#[test]
fn interior_defaults_render_the_airlock() {
    let props = InteriorPageProps {
        interior: InteriorState::default(),
        on_select: Callback::noop(),
        on_cancel: Callback::noop(),
        on_complete_task: Callback::noop(),
        on_continue: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<InteriorPage>::with_props(props).render());
    assert!(html.contains("Airlock"));
}
