//! HTML fragments for the books module. Fragments are wrapped in the
//! site layout by the page renderer; all record data is escaped here.

use bookshelf_http::page::escape;
use bookshelf_store::DocumentId;

use super::models::{Book, BookFields};

const LIST_PATH: &str = "/books";
const CREATE_PATH: &str = "/books/create";
const DELETE_PATH: &str = "/books/delete";

/// Table of all books with a delete button per row.
pub fn list_fragment(books: &[Book]) -> String {
    let rows: String = books
        .iter()
        .map(|book| {
            let id = escape(&book.id.to_string());
            format!(
                r#"<tr>
                    <th scope="row">{id}</th>
                    <td>{title}</td>
                    <td>{author}</td>
                    <td>{publisher}</td>
                    <td>{date}</td>
                    <td>{website}</td>
                    <td>
                        <form id="delete-{id}" action="{DELETE_PATH}" method="POST">
                            <input type="hidden" name="id" value="{id}">
                        </form>
                        <button type="submit" form="delete-{id}" class="btn btn-danger btn-sm">Delete</button>
                    </td>
                </tr>"#,
                id = id,
                title = escape(&book.fields.title),
                author = escape(&book.fields.author),
                publisher = escape(&book.fields.publisher),
                date = escape(&book.fields.date),
                website = escape(&book.fields.website),
            )
        })
        .collect();

    format!(
        r#"<div class="d-flex justify-content-between align-items-center mb-2">
            <h1>List of Books</h1>
            <a class="btn btn-primary" href="{CREATE_PATH}">Add new book</a>
        </div>
        <div class="table-responsive">
            <table class="table table-bordered align-middle">
                <thead class="table-light">
                    <tr>
                        <th scope="col">#</th>
                        <th scope="col">Title</th>
                        <th scope="col">Author</th>
                        <th scope="col">Publisher</th>
                        <th scope="col">Date</th>
                        <th scope="col">Website</th>
                        <th scope="col">Action</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>"#
    )
}

/// Input form for a new book, optionally pre-filled.
pub fn create_form_fragment(prefill: &BookFields) -> String {
    format!(
        r#"<form action="{CREATE_PATH}" method="POST">
            <div class="row g-3">
                <div class="col-12 d-flex justify-content-between align-items-center">
                    <h1>Add a New Book</h1>
                    <a class="btn btn-primary" href="{CREATE_PATH}?random">Random Data</a>
                </div>
                <div class="col-12">
                    <label for="title" class="form-label">Title</label>
                    <input type="text" class="form-control" id="title" name="title" value="{title}">
                </div>
                <div class="col-12 col-md-4">
                    <label for="author" class="form-label">Author</label>
                    <input type="text" class="form-control" id="author" name="author" value="{author}">
                </div>
                <div class="col-12 col-md-4">
                    <label for="publisher" class="form-label">Publisher</label>
                    <input type="text" class="form-control" id="publisher" name="publisher" value="{publisher}">
                </div>
                <div class="col-12 col-md-4">
                    <label for="date" class="form-label">Date (YYYY-MM-DD)</label>
                    <input type="date" class="form-control" id="date" name="date" value="{date}">
                </div>
                <div class="col-12">
                    <label for="website" class="form-label">Website</label>
                    <input type="text" class="form-control" id="website" name="website" value="{website}">
                </div>
                <div class="col-12">
                    <button type="submit" class="btn btn-primary">Submit</button>
                </div>
            </div>
        </form>"#,
        title = escape(&prefill.title),
        author = escape(&prefill.author),
        publisher = escape(&prefill.publisher),
        date = escape(&prefill.date),
        website = escape(&prefill.website),
    )
}

/// Confirmation shown after a successful create.
pub fn confirmation_fragment(id: &DocumentId, fields: &BookFields) -> String {
    format!(
        r#"<h1 class="mb-2">Submission Complete</h1>
        <p class="mb-3">The following book has been added! To view the list of books, click <a href="{LIST_PATH}">here</a></p>
        <div class="table-responsive">
            <table class="table table-bordered align-middle">
                <thead class="table-light">
                    <tr>
                        <th scope="col">#</th>
                        <th scope="col">Title</th>
                        <th scope="col">Author</th>
                        <th scope="col">Publisher</th>
                        <th scope="col">Date</th>
                        <th scope="col">Website</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <th scope="row">{id}</th>
                        <td>{title}</td>
                        <td>{author}</td>
                        <td>{publisher}</td>
                        <td>{date}</td>
                        <td>{website}</td>
                    </tr>
                </tbody>
            </table>
        </div>"#,
        id = escape(&id.to_string()),
        title = escape(&fields.title),
        author = escape(&fields.author),
        publisher = escape(&fields.publisher),
        date = escape(&fields.date),
        website = escape(&fields.website),
    )
}
