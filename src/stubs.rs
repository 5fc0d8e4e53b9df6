//! Generated-file content for the per-app stubs.
//!
//! These are the fixed templates the scaffolder writes into each app:
//! a minimal function view and a urls module that mounts it. Both are
//! unconditional overwrites parameterized only by the app name.

/// Content for `{app}/views.py`: one function view named `{app}_starter`
/// returning an `<h1>` with the uppercased app name.
pub fn views_module(app_name: &str) -> String {
    format!(
        "from django.http import HttpResponse\n\n\
         def {app}_starter(request):\n    \
         return HttpResponse(\"<h1>{upper} PAGE</h1>\")\n",
        app = app_name,
        upper = app_name.to_uppercase()
    )
}

/// Content for `{app}/urls.py`: declares the app namespace and a single
/// empty-path route named `{app}_all`, bound to the starter view.
///
/// The project-level urls.py includes this module via the patch pipeline.
pub fn app_urls_module(app_name: &str) -> String {
    format!(
        "from django.urls import path\n\
         from . import views\n\n\
         app_name = '{app}'\n\n\
         urlpatterns = [\n    \
         path('', views.{app}_starter, name='{app}_all')\n\
         ]\n",
        app = app_name
    )
}
