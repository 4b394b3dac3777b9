use showcase::Fixtures;

use crate::render::Pages;

pub(crate) struct AppState {
    pub(crate) fixtures: Fixtures,
    pub(crate) pages: Pages,
}
