#![cfg(all(target_arch = "wasm32", feature = "web"))]

use pagetheme::StyleVar;
use pagetheme::style::StyleContext;
use pagetheme::theme::{DARK, FOREST, ThemeDefinition};
use pagetheme::web::{DocumentRootStyle, set_theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{CssStyleDeclaration, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn root_style() -> CssStyleDeclaration {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .expect("document root");
    root.dyn_into::<HtmlElement>().expect("html element").style()
}

fn detached_style() -> CssStyleDeclaration {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let div = document.create_element("div").expect("create div");
    div.dyn_into::<HtmlElement>().expect("html element").style()
}

fn clear_root() {
    let style = root_style();
    for var in StyleVar::ALL {
        style.remove_property(var.css_name()).expect("remove property");
    }
}

fn snapshot(style: &CssStyleDeclaration) -> Vec<String> {
    StyleVar::ALL
        .iter()
        .map(|var| style.get_property_value(var.css_name()).expect("read property"))
        .collect()
}

fn assert_theme(style: &CssStyleDeclaration, definition: &ThemeDefinition) {
    for (var, value) in definition.values() {
        let actual = style.get_property_value(var.css_name()).expect("read property");
        assert_eq!(actual.trim(), value, "{var}");
    }
}

#[wasm_bindgen_test]
fn set_theme_writes_all_root_variables() {
    clear_root();
    set_theme("forest");

    let style = root_style();
    assert_eq!(
        style.get_property_value("--navbar-border").unwrap().trim(),
        "#81c784"
    );
    assert_theme(&style, &FOREST);
}

#[wasm_bindgen_test]
fn set_theme_unknown_name_leaves_root_unchanged() {
    clear_root();
    set_theme("dark");
    let before = snapshot(&root_style());

    set_theme("neon");
    set_theme("");
    set_theme("Forest");

    assert_eq!(snapshot(&root_style()), before);
    assert_theme(&root_style(), &DARK);
}

#[wasm_bindgen_test]
fn set_theme_unknown_name_on_clean_root_writes_nothing() {
    clear_root();
    set_theme("neon");

    assert!(snapshot(&root_style()).iter().all(String::is_empty));
}

#[wasm_bindgen_test]
fn document_root_style_overwrites_previous_theme() {
    clear_root();
    let mut root = DocumentRootStyle::from_window().expect("browser page");
    pagetheme::apply_theme(&mut root, "pink");
    pagetheme::apply_theme(&mut root, "dark");

    assert_theme(&root_style(), &DARK);
}

#[wasm_bindgen_test]
fn from_style_writes_to_a_detached_element() {
    let style = detached_style();
    let mut ctx = DocumentRootStyle::from_style(style.clone());
    ctx.set_property("--logo-bg", "#2e7d32");
    pagetheme::apply_theme(&mut ctx, "forest");

    assert_theme(&style, &FOREST);
    assert_eq!(style.get_property_value("--logo-bg").unwrap().trim(), "#2e7d32");
}
