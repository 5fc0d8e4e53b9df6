//! Ordered patch steps for the project-level `urls.py`.
//!
//! Transforms the stock generated routing file into one that serves a
//! temporary home page and mounts every configured app. Steps, in order:
//!
//! 1. `strip-doc-header`: drop the generator's docstring.
//! 2. `inject-home-view`: extend the path import with `include` and add a
//!    throwaway `starter_home` view (marked for later removal).
//! 3. `inject-home-route`: bind the empty path to `starter_home` at the top
//!    of the route list.
//! 4. `append-app-routes`: mount `<app>/` to `<app>.urls` for each app, in
//!    config order, just before the closing bracket of `urlpatterns`.

use super::{list_close_index, replace_first_literal, step_error, strip_doc_header};
use crate::error::Result;

const FILE: &str = "urls.py";

/// Replacement for the first `import path` line: pulls in `include` and
/// defines the temporary home view the injected route points at.
const HOME_VIEW_INJECTION: &str = "import path, include\n\
from django.http import HttpResponse # remove this import later\n\
\n\
# remove this function later:\n\
def starter_home(request):\n\
    return HttpResponse(\"<h1>HOME PAGE</h1>\")\n\
\n";

/// Route binding the empty path to the temporary home view, inserted right
/// after the opening bracket of the route list.
const HOME_ROUTE_INJECTION: &str = "[\n    path('', starter_home, name='home'),\n    ";

/// Apply the full urls.py patch sequence.
///
/// # Arguments
///
/// * `text` - The whole generated file content
/// * `apps` - App names in mount order
///
/// # Returns
///
/// * `Ok(String)` - The patched file content
/// * `Err(DjstartError::PatchError)` - A step's anchor was not found
pub fn patch_urls(text: &str, apps: &[String]) -> Result<String> {
    let text = strip_doc_header(text, FILE)?;
    let text = replace_first_literal(
        &text,
        "import path\n",
        HOME_VIEW_INJECTION,
        "inject-home-view",
        FILE,
    )?;
    let text = replace_first_literal(
        &text,
        "[\n    ",
        HOME_ROUTE_INJECTION,
        "inject-home-route",
        FILE,
    )?;
    append_app_routes(&text, apps)
}

/// Step `append-app-routes`: insert one include() mount per app before the
/// closing bracket of `urlpatterns`.
///
/// The closing bracket is located by counting balanced brackets from the
/// `urlpatterns = [` opener, so an unrelated `]` earlier in the file can
/// never be picked up.
fn append_app_routes(text: &str, apps: &[String]) -> Result<String> {
    const STEP: &str = "append-app-routes";
    const OPENER: &str = "urlpatterns = [";

    let opener_idx = text
        .find(OPENER)
        .ok_or_else(|| step_error(STEP, "`urlpatterns = [`", FILE))?;
    let open_bracket = opener_idx + OPENER.len() - 1;

    let close_bracket = list_close_index(text, open_bracket)
        .ok_or_else(|| step_error(STEP, "the closing bracket of `urlpatterns`", FILE))?;

    let mut mounts = String::new();
    for app in apps {
        mounts.push_str(&format!("    path('{app}/', include('{app}.urls')),\n"));
    }

    Ok(format!(
        "{}{}{}",
        &text[..close_bracket],
        mounts,
        &text[close_bracket..]
    ))
}
