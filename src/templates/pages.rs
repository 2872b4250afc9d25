use maud::{html, Markup};

use super::components::{genre_badges, notice_banner, search_box, search_result_list, show_list};
use super::layout::base_layout;
use crate::db::entities::{artist, venue};
use crate::db::queries::{
    Listing, ListingKind, LocationGroup, NamedRef, SearchResults, ShowCounts, ShowDetail,
    ShowListing,
};
use crate::forms::Seeking;

/// Home page: the recently-added feed, venues and artists interleaved.
pub fn home_page(feed: &[Listing], notice: Option<&str>) -> Markup {
    base_layout(
        "Home",
        html! {
            (notice_banner(notice))

            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Recently Listed" }

            @if feed.is_empty() {
                p class="text-gray-500" { "Nothing listed yet. Add a venue or an artist to get started." }
            } @else {
                ul class="space-y-3" {
                    @for listing in feed {
                        li class="flex items-center justify-between bg-white rounded-md shadow-sm p-4" {
                            div {
                                @match listing.kind {
                                    ListingKind::Venue => {
                                        a href={"/venues/" (listing.id)} class="font-medium text-blue-700" { (listing.name) }
                                    }
                                    ListingKind::Artist => {
                                        a href={"/artists/" (listing.id)} class="font-medium text-purple-700" { (listing.name) }
                                    }
                                }
                                span class="ml-2 text-xs uppercase tracking-wide text-gray-400" { (listing.kind.as_str()) }
                            }
                            span class="text-sm text-gray-500" { (listing.added.format("%m/%d/%Y, %H:%M")) }
                        }
                    }
                }
            }
        },
    )
}

/// Venue directory grouped by (city, state).
pub fn venues_page(groups: &[LocationGroup]) -> Markup {
    base_layout(
        "Venues",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Venues" }

            (search_box("/venues/search", "Find a venue"))

            @if groups.is_empty() {
                p class="text-gray-500" { "No venues listed yet." }
            }
            @for group in groups {
                section class="mb-8" {
                    h2 class="text-lg font-semibold text-gray-700 mb-3" {
                        (group.city.as_deref().unwrap_or("Unknown city"))
                        ", "
                        (group.state.as_deref().unwrap_or("—"))
                    }
                    ul class="space-y-2" {
                        @for venue in &group.venues {
                            li class="flex items-center justify-between bg-white rounded-md shadow-sm p-4" {
                                a href={"/venues/" (venue.id)} class="font-medium text-blue-700" { (venue.name) }
                                span class="text-sm text-gray-500" {
                                    (venue.upcoming_shows) " upcoming"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(
    venue: &venue::Model,
    seeking: &Seeking,
    counts: ShowCounts,
    past: &[ShowDetail],
    upcoming: &[ShowDetail],
) -> Markup {
    base_layout(
        &venue.name,
        html! {
            div class="bg-white rounded-md shadow-sm p-6" {
                div class="flex items-start space-x-6" {
                    @if let Some(link) = &venue.image_link {
                        img src=(link) alt=(venue.name) class="h-32 w-32 rounded-md object-cover";
                    }
                    div {
                        h1 class="text-2xl font-bold text-gray-900" { (venue.name) }
                        (genre_badges(&venue.genre_list()))
                        p class="mt-2 text-gray-600" {
                            (venue.address.as_deref().unwrap_or(""))
                            ", "
                            (venue.city.as_deref().unwrap_or(""))
                            ", "
                            (venue.state.as_deref().unwrap_or(""))
                        }
                        @if let Some(phone) = &venue.phone {
                            p class="text-gray-600" { (phone) }
                        }
                        @if let Some(site) = &venue.website_link {
                            a href=(site) class="text-blue-700" { (site) }
                        }
                        @if let Some(fb) = &venue.facebook_link {
                            p { a href=(fb) class="text-blue-700" { (fb) } }
                        }
                        @if seeking.is_set() {
                            p class="mt-3 text-amber-700 font-medium" { "Seeking talent" }
                            @if let Some(desc) = &venue.seeking_description {
                                p class="text-gray-600" { (desc) }
                            }
                        }
                    }
                }

                div class="mt-4 flex space-x-3" {
                    a href={"/venues/" (venue.id) "/edit"} class="rounded-md border px-3 py-1 text-sm text-gray-700" { "Edit" }
                }
            }

            (show_list("Past Shows", past, "/artists"))
            (show_list("Upcoming Shows", upcoming, "/artists"))

            p class="mt-4 text-sm text-gray-400" {
                (counts.past) " past, " (counts.upcoming) " upcoming"
            }
        },
    )
}

/// Artist index: plain id/name list.
pub fn artists_page(artists: &[NamedRef]) -> Markup {
    base_layout(
        "Artists",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Artists" }

            (search_box("/artists/search", "Find an artist"))

            @if artists.is_empty() {
                p class="text-gray-500" { "No artists listed yet." }
            } @else {
                ul class="space-y-2" {
                    @for artist in artists {
                        li class="bg-white rounded-md shadow-sm p-4" {
                            a href={"/artists/" (artist.id)} class="font-medium text-purple-700" { (artist.name) }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_detail_page(
    artist: &artist::Model,
    seeking: &Seeking,
    counts: ShowCounts,
    past: &[ShowDetail],
    upcoming: &[ShowDetail],
) -> Markup {
    base_layout(
        &artist.name,
        html! {
            div class="bg-white rounded-md shadow-sm p-6" {
                div class="flex items-start space-x-6" {
                    @if let Some(link) = &artist.image_link {
                        img src=(link) alt=(artist.name) class="h-32 w-32 rounded-full object-cover";
                    }
                    div {
                        h1 class="text-2xl font-bold text-gray-900" { (artist.name) }
                        (genre_badges(&artist.genre_list()))
                        p class="mt-2 text-gray-600" {
                            (artist.city.as_deref().unwrap_or(""))
                            ", "
                            (artist.state.as_deref().unwrap_or(""))
                        }
                        @if let Some(phone) = &artist.phone {
                            p class="text-gray-600" { (phone) }
                        }
                        @if let Some(site) = &artist.website_link {
                            a href=(site) class="text-blue-700" { (site) }
                        }
                        @if let Some(fb) = &artist.facebook_link {
                            p { a href=(fb) class="text-blue-700" { (fb) } }
                        }
                        @if seeking.is_set() {
                            p class="mt-3 text-amber-700 font-medium" { "Seeking a venue" }
                            @if let Some(desc) = &artist.seeking_description {
                                p class="text-gray-600" { (desc) }
                            }
                        }
                    }
                }

                div class="mt-4 flex space-x-3" {
                    a href={"/artists/" (artist.id) "/edit"} class="rounded-md border px-3 py-1 text-sm text-gray-700" { "Edit" }
                }
            }

            (show_list("Past Shows", past, "/venues"))
            (show_list("Upcoming Shows", upcoming, "/venues"))

            p class="mt-4 text-sm text-gray-400" {
                (counts.past) " past, " (counts.upcoming) " upcoming"
            }
        },
    )
}

pub fn search_results_page(kind: ListingKind, term: &str, results: &SearchResults) -> Markup {
    let (title, base, action, placeholder) = match kind {
        ListingKind::Venue => ("Venue Search", "/venues", "/venues/search", "Find a venue"),
        ListingKind::Artist => (
            "Artist Search",
            "/artists",
            "/artists/search",
            "Find an artist",
        ),
    };
    base_layout(
        title,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }

            (search_box(action, placeholder))

            p class="text-gray-600 mb-4" {
                (results.count) " result(s) for \"" (term) "\""
            }

            (search_result_list(results, base))
        },
    )
}

pub fn shows_page(shows: &[ShowListing]) -> Markup {
    base_layout(
        "Shows",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Shows" }

            @if shows.is_empty() {
                p class="text-gray-500" { "No shows listed yet." }
            } @else {
                ul class="space-y-3" {
                    @for show in shows {
                        li class="flex items-center space-x-4 bg-white rounded-md shadow-sm p-4" {
                            @if let Some(link) = &show.artist_image_link {
                                img src=(link) alt=(show.artist_name) class="h-12 w-12 rounded-full object-cover";
                            }
                            div {
                                a href={"/artists/" (show.artist_id)} class="font-medium text-purple-700" { (show.artist_name) }
                                " at "
                                a href={"/venues/" (show.venue_id)} class="font-medium text-blue-700" { (show.venue_name) }
                                p class="text-sm text-gray-500" { (show.start_time.format("%m/%d/%Y, %H:%M")) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page(msg: &str) -> Markup {
    base_layout(
        "Not Found",
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900" { "404" }
                p class="mt-4 text-gray-600" { (msg) }
                a href="/" class="mt-6 inline-block text-blue-700" { "Back to home" }
            }
        },
    )
}

pub fn error_page(msg: &str) -> Markup {
    base_layout(
        "Error",
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900" { "Something went wrong" }
                p class="mt-4 text-gray-600" { (msg) }
                a href="/" class="mt-6 inline-block text-blue-700" { "Back to home" }
            }
        },
    )
}
