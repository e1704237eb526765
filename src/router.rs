use crate::api::ApiError;
use crate::domain::logic::search_properties;
use crate::domain::property::parse_type_filter;
use crate::domain::PropertyForm;
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, see_other, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{
    add_property_page, load_error_page, loading_page, properties_page, property_detail_page,
    AddPropertyVm, PropertiesVm,
};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info, warn};

const ADD_PROPERTY_PATH: &str = "/properties/add-property";

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => list_properties(&req, state),
        ("POST", "/page/next") => next_page(state),
        ("POST", "/page/prev") => prev_page(state),
        ("POST", "/filter") => set_filter(req, state),
        ("GET", ADD_PROPERTY_PATH) => html_response(add_property_page(&AddPropertyVm::default())),
        ("POST", ADD_PROPERTY_PATH) => create_property(req, state),
        ("GET", p) => match p.strip_prefix("/properties/") {
            Some(raw) if !raw.is_empty() && !raw.contains('/') => {
                let id = urlencoding::decode(raw)
                    .map_err(|e| ServerError::BadRequest(format!("invalid property id: {e}")))?;
                property_detail(&id, state)
            }
            _ => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn list_properties(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let search = params.get("q").map(String::as_str).unwrap_or("");

    let mut snapshot = state.list.snapshot();
    if snapshot.loading {
        return html_response(loading_page());
    }
    // a failed or missing load is retried on every visit
    if snapshot.error.is_some() || snapshot.properties.is_none() {
        state.list.refetch();
        snapshot = state.list.snapshot();
    }

    let page = match (&snapshot.error, &snapshot.properties) {
        (None, Some(page)) => page,
        _ => return html_response_with_status(502, load_error_page()),
    };

    let visible = search_properties(&page.data, search);

    // quick view falls back to the first listing on the page
    let selected = if params.get("details").map(String::as_str) == Some("open") {
        params
            .get("selected")
            .and_then(|id| page.data.iter().find(|p| &p.id == id))
            .or_else(|| page.data.first())
    } else {
        None
    };

    html_response(properties_page(&PropertiesVm {
        page,
        filter: snapshot.cursor.filter,
        search,
        visible,
        selected,
    }))
}

fn next_page(state: &AppState) -> ResultResp {
    let snapshot = state.list.snapshot();
    if snapshot.error.is_some() {
        // the kept envelope belongs to an older page; retry the cursor's page
        state.list.refetch();
    } else if snapshot.properties.is_some_and(|p| p.next.is_some()) {
        state.list.next_page();
    }
    see_other("/")
}

fn prev_page(state: &AppState) -> ResultResp {
    let snapshot = state.list.snapshot();
    let has_prev = match (&snapshot.error, &snapshot.properties) {
        (Some(_), _) => snapshot.cursor.page > 1,
        (None, Some(page)) => page.prev.is_some(),
        (None, None) => false,
    };
    if has_prev {
        state.list.prev_page();
    }
    see_other("/")
}

fn set_filter(req: Request, state: &AppState) -> ResultResp {
    let form = parse_form(req)?;
    let value = form
        .get("property_type")
        .ok_or_else(|| ServerError::BadRequest("missing property_type".into()))?;
    let filter = parse_type_filter(value).map_err(ServerError::BadRequest)?;

    state.list.set_filter(filter);
    see_other("/")
}

fn create_property(req: Request, state: &AppState) -> ResultResp {
    let body = read_body(req)?;
    let form = PropertyForm::from_pairs(url::form_urlencoded::parse(body.as_bytes()))
        .map_err(ServerError::BadRequest)?;

    let new = match form.to_new_property() {
        Ok(new) => new,
        Err(message) => {
            return html_response(add_property_page(&AddPropertyVm {
                form,
                error: Some(message),
            }))
        }
    };

    match state.source.create_property(&new) {
        Ok(created) => {
            info!(id = %created.id, name = %created.property_name, "property created");
            state.list.refetch();
            see_other("/")
        }
        Err(err) => {
            warn!(error = %err, "property creation failed");
            let message = match err {
                ApiError::Rejected { message, .. } => message,
                other => other.to_string(),
            };
            html_response(add_property_page(&AddPropertyVm {
                form,
                error: Some(message),
            }))
        }
    }
}

fn property_detail(id: &str, state: &AppState) -> ResultResp {
    match state.source.fetch_property(id) {
        Ok(property) => html_response(property_detail_page(&property)),
        Err(ApiError::NotFound(_)) => html_response_with_status(404, load_error_page()),
        Err(err) => {
            warn!(%id, error = %err, "property fetch failed");
            html_response_with_status(502, load_error_page())
        }
    }
}

fn read_body(mut req: Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(body)
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let body = read_body(req)?;
    Ok(url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
