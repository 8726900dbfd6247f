use web_sys::Element;
use yew::prelude::*;
use zakconsult_core::mailto_href;

#[derive(Properties, PartialEq, Clone)]
pub struct FormSuccessProps {
    pub recipient: AttrValue,
}

/// Notice shown in place of the contact form once the `mailto:` link fires.
#[function_component(FormSuccess)]
pub fn form_success(p: &FormSuccessProps) -> Html {
    let href = mailto_href(&p.recipient);
    html! {
        <div class="form-success" role="status" aria-live="polite">
            <h3>{ "Opening your email client..." }</h3>
            <p>
                { "If it doesn't open, email us directly at " }
                <a href={href}>{ p.recipient.clone() }</a>
            </p>
        </div>
    }
}

/// Replace the children of `root` with the success notice.
pub fn render_into(root: &Element, recipient: &str) {
    root.set_inner_html("");
    yew::Renderer::<FormSuccess>::with_root_and_props(
        root.clone(),
        FormSuccessProps {
            recipient: AttrValue::from(recipient.to_string()),
        },
    )
    .render();
}
