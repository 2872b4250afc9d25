use maud::{html, Markup};

use crate::db::queries::{ShowDetail, SearchResults};

pub fn notice_banner(notice: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = notice {
            div class="mb-4 rounded-md bg-green-50 border border-green-200 px-4 py-3 text-green-800" {
                (msg)
            }
        }
    }
}

pub fn search_box(action: &str, placeholder: &str) -> Markup {
    html! {
        form method="post" action=(action) class="mb-6 flex" {
            input
                type="search"
                name="search_term"
                placeholder=(placeholder)
                class="flex-grow rounded-l-md border border-gray-300 px-4 py-2";
            button type="submit" class="rounded-r-md bg-primary bg-blue-600 text-white px-4 py-2" {
                "Search"
            }
        }
    }
}

pub fn genre_badges(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="rounded-full bg-blue-100 text-blue-800 px-3 py-1 text-xs font-medium" {
                    (genre)
                }
            }
        }
    }
}

/// A detail page's show list. `counterpart_base` is "/artists" on a venue
/// page and "/venues" on an artist page.
pub fn show_list(heading: &str, shows: &[ShowDetail], counterpart_base: &str) -> Markup {
    html! {
        section class="mt-8" {
            h2 class="text-xl font-semibold text-gray-900 mb-4" { (heading) " (" (shows.len()) ")" }
            @if shows.is_empty() {
                p class="text-gray-500" { "No shows." }
            } @else {
                ul class="space-y-3" {
                    @for show in shows {
                        li class="flex items-center space-x-4 bg-white rounded-md shadow-sm p-4" {
                            @if let Some(link) = &show.counterpart_image_link {
                                img src=(link) alt=(show.counterpart_name) class="h-12 w-12 rounded-full object-cover";
                            }
                            div {
                                a href={(counterpart_base) "/" (show.counterpart_id)} class="font-medium text-blue-700" {
                                    (show.counterpart_name)
                                }
                                p class="text-sm text-gray-500" {
                                    (show.start_time.format("%m/%d/%Y, %H:%M"))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn search_result_list(results: &SearchResults, base: &str) -> Markup {
    html! {
        ul class="space-y-2" {
            @for item in &results.data {
                li class="bg-white rounded-md shadow-sm p-4" {
                    a href={(base) "/" (item.id)} class="font-medium text-blue-700" { (item.name) }
                }
            }
        }
    }
}
