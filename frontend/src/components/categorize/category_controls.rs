use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::Category;

#[derive(Properties, PartialEq)]
pub struct CategoryControlsProps {
    pub selected_category: Option<Category>,
    pub selected_count: usize,
    pub selected_total: String,
    pub submitting: bool,
    pub on_category_change: Callback<Option<Category>>,
    pub on_categorize: Callback<()>,
    pub on_auto_categorize: Callback<()>,
}

/// Maps the select's value to a category; the placeholder option is empty
fn parse_selected(value: &str) -> Option<Category> {
    value.parse::<Category>().ok()
}

#[function_component(CategoryControls)]
pub fn category_controls(props: &CategoryControlsProps) -> Html {
    let onchange = {
        let on_category_change = props.on_category_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_category_change.emit(parse_selected(&select.value()));
            }
        })
    };

    let on_categorize = {
        let on_categorize = props.on_categorize.clone();
        Callback::from(move |_: MouseEvent| on_categorize.emit(()))
    };

    let on_auto_categorize = {
        let on_auto_categorize = props.on_auto_categorize.clone();
        Callback::from(move |_: MouseEvent| on_auto_categorize.emit(()))
    };

    html! {
        <div class="category-controls">
            <select class="category-select" {onchange} disabled={props.submitting}>
                <option value="" selected={props.selected_category.is_none()}>{"Select category"}</option>
                {for Category::ALL.iter().map(|category| html! {
                    <option
                        value={category.as_str()}
                        selected={props.selected_category == Some(*category)}
                    >
                        {category.as_str()}
                    </option>
                })}
            </select>
            <button class="btn btn-primary" onclick={on_categorize} disabled={props.submitting}>
                {if props.submitting { "Saving..." } else { "Categorize" }}
            </button>
            <button class="btn btn-secondary" onclick={on_auto_categorize} disabled={props.submitting}>
                {"Auto-categorize"}
            </button>
            <span class="selection-summary">
                {format!("{} selected, total: £{}", props.selected_count, props.selected_total)}
            </span>
        </div>
    }
}
