//! Route handlers.
//!
//! Every handler catches its errors: failures are logged, turned into a
//! flash message and answered with a redirect. Only the index renders a
//! dedicated error page.

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use docket_core::{
    display::pages::EMPTY_INDEX_MESSAGE, CreateItem, CreatePage, DocketError, EditItem, EditPage,
    ErrorPage, Id, IndexPage,
};
use log::{error, info, warn};
use serde::Deserialize;

use super::{flash, pages::Page, AppState};

/// Form body of `POST /create/`. Missing fields count as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateForm {
    pub content: String,
    pub list: String,
    pub new_list: String,
}

/// Form body of `POST /{id}/edit/`. Missing fields count as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditForm {
    pub content: String,
    pub list: String,
}

fn edit_path(id: u64) -> String {
    format!("/{id}/edit/")
}

fn redirect_with_flash(jar: SignedCookieJar, to: &str, message: impl Into<String>) -> Response {
    (flash::push(jar, message), Redirect::to(to)).into_response()
}

/// Logs a handler failure and redirects with its message.
fn fail(jar: SignedCookieJar, to: &str, err: &DocketError) -> Response {
    if err.is_validation() {
        warn!("Request rejected: {err}");
    } else {
        error!("Request failed: {err}");
    }
    redirect_with_flash(jar, to, err.to_string())
}

/// GET / - All items grouped by list
pub async fn index(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let (jar, mut flashes) = flash::take(jar);

    match state.tracker.index().await {
        Ok(groups) => {
            if groups.is_empty() {
                flashes.push(EMPTY_INDEX_MESSAGE.to_string());
            }
            let page = Page::Index(IndexPage::new(&groups, &flashes));
            (jar, state.renderer.render(&page)).into_response()
        }
        Err(err) => {
            error!("Failed to load lists: {err}");
            flashes.push(err.to_string());
            let page = Page::Error(ErrorPage { flashes: &flashes });
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                jar,
                state.renderer.render(&page),
            )
                .into_response()
        }
    }
}

/// GET /create/ - Form for a new item
pub async fn create_form(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    match state.tracker.list_titles().await {
        Ok(list_titles) => {
            let (jar, flashes) = flash::take(jar);
            let page = Page::Create(CreatePage {
                list_titles: &list_titles,
                flashes: &flashes,
            });
            (jar, state.renderer.render(&page)).into_response()
        }
        Err(err) => fail(jar, "/", &err),
    }
}

/// POST /create/ - Create an item, and its list when requested
pub async fn create(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<CreateForm>,
) -> Response {
    let result = async {
        let params = CreateItem::from_form(&form.content, &form.list, &form.new_list)?;
        state.tracker.create_item(&params).await
    }
    .await;

    match result {
        Ok(item) => {
            info!("Created task {} in list {}", item.id, item.list_id);
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => fail(jar, "/", &err),
    }
}

/// POST /{id}/do/ - Mark an item done
pub async fn mark_done(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<u64>,
) -> Response {
    match state.tracker.mark_done(&Id::from(id)).await {
        Ok(changed) => {
            info!("Marked task {id} done ({changed} row(s) changed)");
            redirect_with_flash(jar, "/", "Task marked as done!")
        }
        Err(err) => fail(jar, "/", &err),
    }
}

/// POST /{id}/undo - Mark an item not done
pub async fn mark_undone(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<u64>,
) -> Response {
    match state.tracker.mark_undone(&Id::from(id)).await {
        Ok(changed) => {
            info!("Marked task {id} undone ({changed} row(s) changed)");
            redirect_with_flash(jar, "/", "Task marked as incomplete!")
        }
        Err(err) => fail(jar, "/", &err),
    }
}

/// GET /{id}/edit/ - Form for editing an item
pub async fn edit_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<u64>,
) -> Response {
    match state.tracker.edit_context(&Id::from(id)).await {
        Ok(context) => {
            let (jar, flashes) = flash::take(jar);
            let page = Page::Edit(EditPage {
                item: &context.item,
                list_titles: &context.list_titles,
                flashes: &flashes,
            });
            (jar, state.renderer.render(&page)).into_response()
        }
        Err(err) => fail(jar, "/", &err),
    }
}

/// POST /{id}/edit/ - Update the content and list of an item
///
/// Bad input sends the user back to the edit form; a missing item or a
/// storage failure sends them to the list view.
pub async fn edit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<u64>,
    Form(form): Form<EditForm>,
) -> Response {
    let params = EditItem {
        id,
        content: form.content,
        list_title: form.list,
    };

    match state.tracker.edit_item(&params).await {
        Ok(item) => {
            info!("Updated task {} (list {})", item.id, item.list_id);
            redirect_with_flash(jar, "/", "Task updated successfully!")
        }
        Err(err @ DocketError::ItemNotFound { .. }) => fail(jar, "/", &err),
        Err(err) if err.is_validation() => fail(jar, &edit_path(id), &err),
        Err(err) => fail(jar, "/", &err),
    }
}

/// POST /{id}/delete/ - Delete an item
pub async fn delete(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<u64>,
) -> Response {
    match state.tracker.delete_item(&Id::from(id)).await {
        Ok(()) => {
            info!("Deleted task {id}");
            redirect_with_flash(jar, "/", "Task deleted successfully!")
        }
        Err(err) => fail(jar, "/", &err),
    }
}
