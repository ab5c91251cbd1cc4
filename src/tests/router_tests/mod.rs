mod catalog_tests;
mod import_tests;
mod prefs_tests;
