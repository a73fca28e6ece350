//! Comment creation, editing and deletion over HTTP

use reqwest::StatusCode;
use serial_test::serial;
use ya_news::{count_comments_core, get_comment_core, list_comments_core};

use crate::common::{MockBrowser, location, seed_comment, seed_news, seed_user, test_server};

const WARNING: &str = "Не ругайтесь!";

#[tokio::test]
#[serial]
async fn test_anonymous_user_cant_create_comment() {
    // Given an article and an anonymous visitor
    let server = test_server();
    let news = seed_news().await;
    let browser = MockBrowser::new(&server.base_url);
    let before = count_comments_core().await.unwrap();

    // When the visitor posts a comment
    let path = format!("/news/{}/", news.id);
    let response = browser
        .post_form(&path, &[("text", "Текст комментария")])
        .await;

    // Then they are sent to the login page and nothing is stored
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/auth/login/?next={path}"));
    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_user_can_create_comment() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let path = format!("/news/{}/", news.id);
    let csrf = browser.csrf_token(&path).await;
    let before = count_comments_core().await.unwrap();

    let response = browser
        .post_form(&path, &[("text", "Текст комментария"), ("csrf_token", csrf.as_str())])
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("{path}#comments"));
    assert_eq!(count_comments_core().await.unwrap(), before + 1);

    let comments = list_comments_core(news.id).await.unwrap();
    let created = &comments.last().unwrap().comment;
    assert_eq!(created.text, "Текст комментария");
    assert_eq!(created.news_id, news.id);
    assert_eq!(created.author_id, author.id);
}

#[tokio::test]
#[serial]
async fn test_user_cant_use_bad_words() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let path = format!("/news/{}/", news.id);
    let csrf = browser.csrf_token(&path).await;
    let before = count_comments_core().await.unwrap();

    for word in ["редиска", "негодяй"] {
        let text = format!("Какой-то text, {word}, еще text");

        let response = browser
            .post_form(&path, &[("text", text.as_str()), ("csrf_token", csrf.as_str())])
            .await;

        // The form comes back with the warning and the submitted text
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.text().await.unwrap();
        assert!(body.contains(WARNING), "warning missing for {word}");
        assert!(body.contains(&text), "submitted text not preserved");
    }

    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_empty_comment_is_rejected() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let path = format!("/news/{}/", news.id);
    let csrf = browser.csrf_token(&path).await;
    let before = count_comments_core().await.unwrap();

    let response = browser
        .post_form(&path, &[("text", "   "), ("csrf_token", csrf.as_str())])
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .text()
            .await
            .unwrap()
            .contains("This field is required.")
    );
    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_wrong_csrf_token_is_forbidden() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let before = count_comments_core().await.unwrap();

    let response = browser
        .post_form(
            &format!("/news/{}/", news.id),
            &[("text", "hello"), ("csrf_token", "forged")],
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_author_can_edit_comment() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let comment = seed_comment(&author, &news, "Текст комментария").await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let edit_path = format!("/edit_comment/{}/", comment.id);

    // The edit form is pre-filled with the current text
    let page = browser.get(&edit_path).await;
    assert_eq!(page.status(), StatusCode::OK);
    assert!(page.text().await.unwrap().contains("Текст комментария"));

    let csrf = browser.csrf_token(&edit_path).await;
    let response = browser
        .post_form(
            &edit_path,
            &[("text", "Обновлённый комментарий"), ("csrf_token", csrf.as_str())],
        )
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        format!("/news/{}/#comments", news.id)
    );
    let stored = get_comment_core(comment.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "Обновлённый комментарий");
    assert_eq!(stored.author_id, author.id);
}

#[tokio::test]
#[serial]
async fn test_author_edit_with_bad_word_keeps_text() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let comment = seed_comment(&author, &news, "original").await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let edit_path = format!("/edit_comment/{}/", comment.id);
    let csrf = browser.csrf_token(&edit_path).await;

    let response = browser
        .post_form(&edit_path, &[("text", "ты негодяй"), ("csrf_token", csrf.as_str())])
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains(WARNING));
    let stored = get_comment_core(comment.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "original");
}

#[tokio::test]
#[serial]
async fn test_author_can_delete_comment() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let comment = seed_comment(&author, &news, "bye").await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let delete_path = format!("/delete_comment/{}/", comment.id);
    let csrf = browser.csrf_token(&delete_path).await;
    let before = count_comments_core().await.unwrap();

    let response = browser
        .post_form(&delete_path, &[("csrf_token", csrf.as_str())])
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        format!("/news/{}/#comments", news.id)
    );
    assert_eq!(count_comments_core().await.unwrap(), before - 1);
    assert!(get_comment_core(comment.id).await.unwrap().is_none());

    // A second delete finds nothing
    let again = browser
        .post_form(&delete_path, &[("csrf_token", csrf.as_str())])
        .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_user_cant_edit_or_delete_comment_of_another_user() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let reader = seed_user("reader", false).await;
    let comment = seed_comment(&author, &news, "Текст комментария").await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&reader.username, &reader.password).await;
    let csrf = browser.csrf_token(&format!("/news/{}/", news.id)).await;
    let edit_path = format!("/edit_comment/{}/", comment.id);
    let delete_path = format!("/delete_comment/{}/", comment.id);
    let before = count_comments_core().await.unwrap();

    for path in [&edit_path, &delete_path] {
        assert_eq!(browser.get(path).await.status(), StatusCode::NOT_FOUND);
    }

    let edit = browser
        .post_form(&edit_path, &[("text", "hacked"), ("csrf_token", csrf.as_str())])
        .await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);

    let delete = browser
        .post_form(&delete_path, &[("csrf_token", csrf.as_str())])
        .await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    let stored = get_comment_core(comment.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "Текст комментария");
    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_anonymous_user_cant_edit_or_delete() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let comment = seed_comment(&author, &news, "hello").await;
    let browser = MockBrowser::new(&server.base_url);
    let edit_path = format!("/edit_comment/{}/", comment.id);
    let delete_path = format!("/delete_comment/{}/", comment.id);

    assert_eq!(browser.get(&edit_path).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        browser.get(&delete_path).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        browser
            .post_form(&edit_path, &[("text", "hacked")])
            .await
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        browser.post_form(&delete_path, &[]).await.status(),
        StatusCode::NOT_FOUND
    );

    let stored = get_comment_core(comment.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "hello");
}

#[tokio::test]
#[serial]
async fn test_anonymous_create_without_form_body_redirects_to_login() {
    let server = test_server();
    let news = seed_news().await;
    let browser = MockBrowser::new(&server.base_url);
    let path = format!("/news/{}/", news.id);
    let before = count_comments_core().await.unwrap();

    let no_body = browser.post_raw(&path, None, "").await;
    let json_body = browser
        .post_raw(&path, Some("application/json"), r#"{"text": "hello"}"#)
        .await;

    for response in [no_body, json_body] {
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), format!("/auth/login/?next={path}"));
    }
    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_anonymous_edit_or_delete_without_form_body_is_not_found() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let comment = seed_comment(&author, &news, "hello").await;
    let browser = MockBrowser::new(&server.base_url);
    let before = count_comments_core().await.unwrap();

    for path in [
        format!("/edit_comment/{}/", comment.id),
        format!("/delete_comment/{}/", comment.id),
    ] {
        assert_eq!(
            browser.post_raw(&path, None, "").await.status(),
            StatusCode::NOT_FOUND,
            "bodyless POST to {path}"
        );
        assert_eq!(
            browser
                .post_raw(&path, Some("application/json"), r#"{"text": "hacked"}"#)
                .await
                .status(),
            StatusCode::NOT_FOUND,
            "JSON POST to {path}"
        );
    }

    let stored = get_comment_core(comment.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "hello");
    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_signed_in_post_without_csrf_is_forbidden() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let comment = seed_comment(&author, &news, "hello").await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let path = format!("/news/{}/", news.id);
    let edit_path = format!("/edit_comment/{}/", comment.id);
    let before = count_comments_core().await.unwrap();

    // No body at all, an empty form and a JSON body all lack a usable token
    for target in [&path, &edit_path] {
        let no_body = browser.post_raw(target, None, "").await;
        let empty_form = browser
            .post_raw(target, Some("application/x-www-form-urlencoded"), "")
            .await;
        let json_body = browser
            .post_raw(target, Some("application/json"), r#"{"text": "x"}"#)
            .await;
        for response in [no_body, empty_form, json_body] {
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "POST to {target}");
        }
    }

    let stored = get_comment_core(comment.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "hello");
    assert_eq!(count_comments_core().await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_csrf_header_is_checked_for_signed_in_user() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let path = format!("/news/{}/", news.id);
    let csrf = browser.csrf_token(&path).await;
    let before = count_comments_core().await.unwrap();

    // A wrong header is refused outright, not treated as an anonymous visit
    let response = browser
        .post_form_with_csrf_header(&path, &[("text", "hello")], "forged")
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.headers().get(reqwest::header::LOCATION).is_none());
    assert_eq!(count_comments_core().await.unwrap(), before);

    // The right header stands in for the form field
    let response = browser
        .post_form_with_csrf_header(&path, &[("text", "hello")], &csrf)
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("{path}#comments"));
    assert_eq!(count_comments_core().await.unwrap(), before + 1);
}

#[tokio::test]
#[serial]
async fn test_admin_gets_no_rights_over_comments() {
    // Given an author, an admin and an article
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    let admin = seed_user("admin", true).await;
    let original = count_comments_core().await.unwrap();
    let path = format!("/news/{}/", news.id);

    // When the author comments
    let mut author_browser = MockBrowser::new(&server.base_url);
    author_browser
        .login(&author.username, &author.password)
        .await;
    let author_csrf = author_browser.csrf_token(&path).await;
    let created = author_browser
        .post_form(&path, &[("text", "hello"), ("csrf_token", author_csrf.as_str())])
        .await;
    assert_eq!(created.status(), StatusCode::FOUND);
    assert_eq!(count_comments_core().await.unwrap(), original + 1);
    let comment = list_comments_core(news.id)
        .await
        .unwrap()
        .pop()
        .unwrap()
        .comment;

    // Then the admin cannot edit it
    let mut admin_browser = MockBrowser::new(&server.base_url);
    admin_browser.login(&admin.username, &admin.password).await;
    let admin_csrf = admin_browser.csrf_token(&path).await;
    let hacked = admin_browser
        .post_form(
            &format!("/edit_comment/{}/", comment.id),
            &[("text", "hacked"), ("csrf_token", admin_csrf.as_str())],
        )
        .await;
    assert_eq!(hacked.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        get_comment_core(comment.id).await.unwrap().unwrap().text,
        "hello"
    );

    // And the author can still delete it
    let deleted = author_browser
        .post_form(
            &format!("/delete_comment/{}/", comment.id),
            &[("csrf_token", author_csrf.as_str())],
        )
        .await;
    assert_eq!(deleted.status(), StatusCode::FOUND);
    assert_eq!(count_comments_core().await.unwrap(), original);
}

#[tokio::test]
#[serial]
async fn test_detail_page_shows_comments_and_form() {
    let server = test_server();
    let news = seed_news().await;
    let author = seed_user("author", false).await;
    seed_comment(&author, &news, "Первый комментарий").await;
    let path = format!("/news/{}/", news.id);

    // Anonymous visitors see comments but no form
    let anonymous = MockBrowser::new(&server.base_url);
    let body = anonymous.get(&path).await.text().await.unwrap();
    assert!(body.contains("Первый комментарий"));
    assert!(body.contains(&author.username));
    assert!(!body.contains("name=\"text\""));

    // Signed-in users get the form and links to their own comment
    let mut browser = MockBrowser::new(&server.base_url);
    browser.login(&author.username, &author.password).await;
    let body = browser.get(&path).await.text().await.unwrap();
    assert!(body.contains("name=\"text\""));
    assert!(body.contains("/edit_comment/"));
}

#[tokio::test]
#[serial]
async fn test_pages_availability() {
    let server = test_server();
    let news = seed_news().await;
    let browser = MockBrowser::new(&server.base_url);

    for path in [
        "/".to_string(),
        format!("/news/{}/", news.id),
        "/auth/login/".to_string(),
        "/auth/signup/".to_string(),
    ] {
        assert_eq!(browser.get(&path).await.status(), StatusCode::OK, "{path}");
    }

    assert_eq!(
        browser.get("/news/999999999/").await.status(),
        StatusCode::NOT_FOUND
    );
}
