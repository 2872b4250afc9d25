use maud::{html, Markup};

use super::layout::base_layout;
use crate::db::entities::{artist, venue};
use crate::forms::Seeking;

const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

fn text_field(name: &str, label: &str, value: Option<&str>) -> Markup {
    html! {
        div class="mb-4" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value.unwrap_or(""))
                class="w-full rounded-md border border-gray-300 px-3 py-2";
        }
    }
}

fn genres_field(selected: &[String]) -> Markup {
    html! {
        div class="mb-4" {
            label class="block text-sm font-medium text-gray-700 mb-1" { "Genres" }
            div class="grid grid-cols-2 md:grid-cols-3 gap-1" {
                @for genre in GENRE_CHOICES {
                    label class="flex items-center space-x-2 text-sm text-gray-700" {
                        input
                            type="checkbox"
                            name="genres"
                            value=(genre)
                            checked[selected.iter().any(|g| g == genre)];
                        span { (genre) }
                    }
                }
            }
        }
    }
}

fn seeking_field(name: &str, label: &str, seeking: &Seeking) -> Markup {
    html! {
        div class="mb-4" {
            label class="flex items-center space-x-2 text-sm font-medium text-gray-700" {
                input type="checkbox" name=(name) value="y" checked[seeking.is_set()];
                span { (label) }
            }
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class="rounded-md bg-blue-600 text-white px-4 py-2 font-medium" {
            (label)
        }
    }
}

/// Venue create/edit form. `venue` prefills the fields when editing.
pub fn venue_form(action: &str, venue: Option<&venue::Model>) -> Markup {
    let seeking = Seeking::from_column(venue.and_then(|v| v.seeking_talent.as_deref()));
    let genres = venue.map(|v| v.genre_list()).unwrap_or_default();
    let title = if venue.is_some() { "Edit Venue" } else { "List a Venue" };
    base_layout(
        title,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }
            form method="post" action=(action) class="bg-white rounded-md shadow-sm p-6 max-w-xl" {
                (text_field("name", "Name", venue.map(|v| v.name.as_str())))
                (text_field("city", "City", venue.and_then(|v| v.city.as_deref())))
                (text_field("state", "State", venue.and_then(|v| v.state.as_deref())))
                (text_field("address", "Address", venue.and_then(|v| v.address.as_deref())))
                (text_field("phone", "Phone", venue.and_then(|v| v.phone.as_deref())))
                (genres_field(&genres))
                (text_field("image_link", "Image Link", venue.and_then(|v| v.image_link.as_deref())))
                (text_field("facebook_link", "Facebook Link", venue.and_then(|v| v.facebook_link.as_deref())))
                (text_field("website_link", "Website Link", venue.and_then(|v| v.website_link.as_deref())))
                (seeking_field("seeking_talent", "Seeking talent", &seeking))
                (text_field("seeking_description", "Seeking Description", venue.and_then(|v| v.seeking_description.as_deref())))
                (submit_button(title))
            }
        },
    )
}

/// Artist create/edit form.
pub fn artist_form(action: &str, artist: Option<&artist::Model>) -> Markup {
    let seeking = Seeking::from_column(artist.and_then(|a| a.seeking_venue.as_deref()));
    let genres = artist.map(|a| a.genre_list()).unwrap_or_default();
    let title = if artist.is_some() { "Edit Artist" } else { "List an Artist" };
    base_layout(
        title,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }
            form method="post" action=(action) class="bg-white rounded-md shadow-sm p-6 max-w-xl" {
                (text_field("name", "Name", artist.map(|a| a.name.as_str())))
                (text_field("city", "City", artist.and_then(|a| a.city.as_deref())))
                (text_field("state", "State", artist.and_then(|a| a.state.as_deref())))
                (text_field("phone", "Phone", artist.and_then(|a| a.phone.as_deref())))
                (genres_field(&genres))
                (text_field("image_link", "Image Link", artist.and_then(|a| a.image_link.as_deref())))
                (text_field("facebook_link", "Facebook Link", artist.and_then(|a| a.facebook_link.as_deref())))
                (text_field("website_link", "Website Link", artist.and_then(|a| a.website_link.as_deref())))
                (seeking_field("seeking_venue", "Seeking a venue", &seeking))
                (text_field("seeking_description", "Seeking Description", artist.and_then(|a| a.seeking_description.as_deref())))
                (submit_button(title))
            }
        },
    )
}

/// Show create form. `start_time` is the fixed `YYYY-MM-DD HH:MM:SS` format.
pub fn show_form() -> Markup {
    base_layout(
        "List a Show",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "List a Show" }
            form method="post" action="/shows/create" class="bg-white rounded-md shadow-sm p-6 max-w-xl" {
                (text_field("artist_id", "Artist ID", None))
                (text_field("venue_id", "Venue ID", None))
                (text_field("start_time", "Start Time (YYYY-MM-DD HH:MM:SS)", None))
                (submit_button("List Show"))
            }
        },
    )
}
