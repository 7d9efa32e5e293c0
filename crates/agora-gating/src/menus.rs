//! Side-menu tables.
//!
//! Menu contributions per Space type are plain static tables selected by a
//! match, assembled once per render from current Space state. There is no
//! registry mutated at import time.

use agora_model::{Space, SpaceType};

/// Translation key of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLabel {
    Overview,
    Discussion,
    Survey,
    Results,
    Incentives,
    Leaderboard,
    Requirements,
    Settings,
}

impl MenuLabel {
    pub fn key(self) -> &'static str {
        match self {
            MenuLabel::Overview => "menu_overview",
            MenuLabel::Discussion => "menu_discussion",
            MenuLabel::Survey => "menu_survey",
            MenuLabel::Results => "menu_results",
            MenuLabel::Incentives => "menu_incentives",
            MenuLabel::Leaderboard => "menu_leaderboard",
            MenuLabel::Requirements => "menu_requirements",
            MenuLabel::Settings => "menu_settings",
        }
    }
}

/// Where a menu entry routes, resolved against the Space by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Overview,
    Discussion,
    Survey,
    Results,
    Incentives,
    Leaderboard,
    Requirements,
    Settings,
}

/// One side-menu entry. `visible` gates the entry on Space state; absent
/// means always shown.
pub struct SideMenu {
    pub label: MenuLabel,
    pub target: MenuTarget,
    pub visible: Option<fn(&Space) -> bool>,
}

const BASE_MENUS: &[SideMenu] = &[SideMenu {
    label: MenuLabel::Overview,
    target: MenuTarget::Overview,
    visible: None,
}];

const DELIBERATION_MENUS: &[SideMenu] = &[
    SideMenu {
        label: MenuLabel::Discussion,
        target: MenuTarget::Discussion,
        visible: None,
    },
    SideMenu {
        label: MenuLabel::Survey,
        target: MenuTarget::Survey,
        visible: None,
    },
];

const POLL_MENUS: &[SideMenu] = &[
    SideMenu {
        label: MenuLabel::Survey,
        target: MenuTarget::Survey,
        visible: None,
    },
    SideMenu {
        label: MenuLabel::Results,
        target: MenuTarget::Results,
        visible: Some(Space::is_finished),
    },
];

const DAO_MENUS: &[SideMenu] = &[SideMenu {
    label: MenuLabel::Incentives,
    target: MenuTarget::Incentives,
    visible: None,
}];

const SPRINT_LEAGUE_MENUS: &[SideMenu] = &[SideMenu {
    label: MenuLabel::Leaderboard,
    target: MenuTarget::Leaderboard,
    visible: None,
}];

const REQUIRE_MENUS: &[SideMenu] = &[SideMenu {
    label: MenuLabel::Requirements,
    target: MenuTarget::Requirements,
    visible: None,
}];

const ADMIN_MENUS: &[SideMenu] = &[SideMenu {
    label: MenuLabel::Settings,
    target: MenuTarget::Settings,
    visible: None,
}];

/// Menu contributions for one Space type.
pub fn menus_for(space_type: SpaceType) -> &'static [SideMenu] {
    match space_type {
        SpaceType::Deliberation => DELIBERATION_MENUS,
        SpaceType::Poll => POLL_MENUS,
        SpaceType::Dao => DAO_MENUS,
        SpaceType::SprintLeague => SPRINT_LEAGUE_MENUS,
        SpaceType::Notice => &[],
    }
}

/// Assemble the visible menu list for the current Space state.
pub fn assemble(space: &Space, gating_active: bool) -> Vec<&'static SideMenu> {
    let mut items: Vec<&'static SideMenu> = if gating_active {
        REQUIRE_MENUS.iter().collect()
    } else {
        BASE_MENUS
            .iter()
            .chain(menus_for(space.space_type))
            .collect()
    };

    if space.is_admin() {
        items.extend(ADMIN_MENUS);
    }

    items
        .into_iter()
        .filter(|menu| menu.visible.map_or(true, |visible| visible(space)))
        .collect()
}
