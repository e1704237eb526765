use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { margin: 0; display: flex; min-height: 100vh; font-family: system-ui, sans-serif; background: #f3f4f6; color: #1f2937; }
aside { padding: 1rem; width: 15rem; border-right: 1.5px solid #d1d5db; }
aside nav ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: .5rem; }
aside nav a { display: block; padding: .5rem 1rem; border-radius: 2px; color: inherit; text-decoration: none; }
aside nav a:hover { background: rgba(156, 163, 175, .1); }
main { flex: 1; padding: 1rem; position: relative; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.25rem; }
.property-card { background: #d1d5db; border-radius: 1rem; padding: 1.25rem; min-height: 220px; display: flex; flex-direction: column; justify-content: space-between; }
.type-badge { background: #374151; color: #fff; width: fit-content; padding: .25rem .75rem; font-size: .875rem; border-radius: .375rem; }
.btn { background: #1f2937; color: #d1d5db; padding: .75rem 1rem; border: 0; border-radius: 2px; cursor: pointer; text-decoration: none; }
.pagination { display: flex; justify-content: flex-end; align-items: center; gap: .5rem; background: #f3f4f6; padding: .5rem; margin-top: 1rem; }
.list-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; gap: .5rem; flex-wrap: wrap; }
.state { padding: 2rem; }
.form-error { color: #dc2626; font-size: .875rem; text-align: center; }
dialog { border: 0; border-radius: .75rem; box-shadow: 0 10px 25px rgba(0,0,0,.2); max-width: 40rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    desktop_layout_with_head(title, html! {}, content)
}

/// Same as `desktop_layout`, with extra elements placed in `<head>`.
pub fn desktop_layout_with_head(title: &str, head_extra: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · PropertyHub" }
                style { (PreEscaped(STYLES)) }
                (head_extra)
            }
            body {
                aside {
                    div class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="32"
                            height="32"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" {}
                            circle cx="12" cy="10" r="3" {}
                        }
                        h1 { "PropertyHub" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Properties" } }
                            li { a href="/properties/add-property" { "Add Property" } }
                        }
                    }
                }
                main { (content) }
            }
        }
    }
}
