//! Ordered patch steps for the project-level `settings.py`.
//!
//! Transforms the stock generated settings into a working configuration.
//! Steps, in order:
//!
//! 1. `strip-doc-header`: drop the generator's docstring.
//! 2. `inject-os-import`: add `import os` after the pathlib import.
//! 3. `register-apps`: append `django_extensions` and every configured app
//!    to INSTALLED_APPS after the staticfiles entry.
//! 4. `set-template-dirs`: point the template DIRS list at `templates/`
//!    under BASE_DIR.
//! 5. `set-language`: replace every `en-us` with the configured locale
//!    (skipped when no override is configured).
//! 6. `set-timezone`: replace every `UTC` with the configured zone
//!    (skipped when no override is configured).
//! 7. `set-static-media`: replace the default STATIC_URL line with the full
//!    static/media block.

use super::{replace_first_literal, strip_doc_header};
use crate::error::Result;

const FILE: &str = "settings.py";

/// Default locale code in the generated settings.
const DEFAULT_LANGUAGE: &str = "en-us";

/// Default timezone identifier in the generated settings.
const DEFAULT_TIMEZONE: &str = "UTC";

/// Static and media configuration that replaces the stock STATIC_URL line.
const STATIC_MEDIA_BLOCK: &str = "STATIC_URL = '/static/'\n\
STATICFILES_DIRS = (os.path.join(BASE_DIR, 'templates', 'static'),)\n\
STATIC_ROOT = os.path.join('static')\n\
\n\
MEDIA_ROOT = os.path.join(BASE_DIR, 'media')\n\
MEDIA_URL = '/media/'\n";

/// Apply the full settings.py patch sequence.
///
/// # Arguments
///
/// * `text` - The whole generated file content
/// * `apps` - App names in registration order
/// * `language` - Locale override; empty keeps the generator default
/// * `timezone` - Timezone override; empty keeps the generator default
pub fn patch_settings(
    text: &str,
    apps: &[String],
    language: &str,
    timezone: &str,
) -> Result<String> {
    let text = strip_doc_header(text, FILE)?;
    let text = replace_first_literal(
        &text,
        "from pathlib import Path\n",
        "from pathlib import Path\nimport os\n",
        "inject-os-import",
        FILE,
    )?;
    let text = register_apps(&text, apps)?;
    let text = replace_first_literal(
        &text,
        "'DIRS': [],\n",
        "'DIRS': [os.path.join(BASE_DIR, 'templates')],\n",
        "set-template-dirs",
        FILE,
    )?;

    // Conditional replace-all overrides. Zero occurrences is not an error,
    // and with no override configured the text passes through untouched.
    let text = if language.is_empty() {
        text
    } else {
        text.replace(DEFAULT_LANGUAGE, language)
    };
    let text = if timezone.is_empty() {
        text
    } else {
        text.replace(DEFAULT_TIMEZONE, timezone)
    };

    replace_first_literal(
        &text,
        "STATIC_URL = 'static/'\n",
        STATIC_MEDIA_BLOCK,
        "set-static-media",
        FILE,
    )
}

/// Step `register-apps`: extend INSTALLED_APPS after the staticfiles entry
/// with the third-party package and the configured apps, in order.
fn register_apps(text: &str, apps: &[String]) -> Result<String> {
    let mut entries = String::from(
        "'django.contrib.staticfiles',\n\n    \
         # additional packages:\n    \
         'django_extensions',\n\n    \
         # project apps:\n",
    );
    for app in apps {
        entries.push_str(&format!("    '{app}',\n"));
    }

    replace_first_literal(
        text,
        "'django.contrib.staticfiles',\n",
        &entries,
        "register-apps",
        FILE,
    )
}
