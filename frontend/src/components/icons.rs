use anyhow::{anyhow, Result};
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

/// Lucide Icons - 清晰的线性 icon 系统
/// SVG 路径来自 lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Shell
    X,

    // Files
    UploadCloud,
    Folder,
    FileText,
    FileSpreadsheet,
    Image,

    // Panels
    Users,
    Activity,
    Clock,

    // Actions
    Check,
}

impl IconName {
    /// 获取 Lucide icon 的 SVG path 数据
    pub fn path(&self) -> &'static str {
        match self {
            IconName::X => "M18 6 6 18M6 6l12 12",

            IconName::UploadCloud => {
                "M4 14.9A7 7 0 1 1 15.7 8h1.8a4.5 4.5 0 0 1 2.5 8.24M12 12v9M8 16l4-4 4 4"
            },
            IconName::Folder => {
                "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 \
                 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2z"
            },
            IconName::FileText => {
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 \
                 17H8M10 9H8"
            },
            IconName::FileSpreadsheet => {
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M8 13h2M14 \
                 13h2M8 17h2M14 17h2"
            },
            IconName::Image => {
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM21 \
                 15l-5-5L5 21M8.5 10a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3z"
            },

            IconName::Users => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 \
                 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            },
            IconName::Activity => "M22 12h-4l-3 9L9 3l-3 9H2",
            IconName::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",

            IconName::Check => "M20 6 9 17l-5-5",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!("icon", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Ask a host-loaded `window.lucide` to replace `<i data-lucide>` placeholders
/// in the static page markup. Returns `Ok(false)` when the host did not load
/// the library; our own components draw inline SVG and never need it.
pub fn create_icons() -> Result<bool> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let lucide = js_sys::Reflect::get(&window, &JsValue::from_str("lucide"))
        .map_err(|err| anyhow!("read window.lucide: {err:?}"))?;
    if lucide.is_undefined() || lucide.is_null() {
        return Ok(false);
    }
    let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))
        .map_err(|err| anyhow!("read lucide.createIcons: {err:?}"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| anyhow!("lucide.createIcons is not a function"))?;
    create
        .call0(&lucide)
        .map_err(|err| anyhow!("lucide.createIcons failed: {err:?}"))?;
    Ok(true)
}

/// Run [`create_icons`] after a DOM change. Failures only reach the console.
pub fn refresh_icons() {
    if let Err(err) = create_icons() {
        web_sys::console::warn_1(&format!("Icon refresh skipped: {err:#}").into());
    }
}
