//! Reference-field visitor.
//!
//! A record is an element of an array document, or an object document
//! itself. Reference fields are recognised on every record, in the order:
//!
//! | Field              | Shape                                  |
//! |--------------------|----------------------------------------|
//! | `featuredImageUrl` | string                                 |
//! | `images`           | array of strings                       |
//! | `coverPhotoUrl`    | string                                 |
//! | `photos`           | array of `{url?, thumbnailUrl?}`       |
//! | `avatarUrl`        | string                                 |
//!
//! Fields of any other shape are skipped silently.

use serde_json::Value;

pub const FEATURED_IMAGE: &str = "featuredImageUrl";
pub const IMAGES: &str = "images";
pub const COVER_PHOTO: &str = "coverPhotoUrl";
pub const PHOTOS: &str = "photos";
pub const AVATAR: &str = "avatarUrl";

/// Keys of a `photos` item that hold references.
pub const PHOTO_KEYS: [&str; 2] = ["url", "thumbnailUrl"];

/// Records of a document root.
pub fn records(root: &Value) -> Vec<&Value> {
    match root {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![root],
        _ => Vec::new(),
    }
}

/// Mutable records of a document root.
pub fn records_mut(root: &mut Value) -> Vec<&mut Value> {
    if root.is_object() {
        return vec![root];
    }
    match root {
        Value::Array(items) => items.iter_mut().collect(),
        _ => Vec::new(),
    }
}

/// Call `f(field, reference)` for every reference in `record`.
pub fn visit(record: &Value, mut f: impl FnMut(&'static str, &str)) {
    let Some(obj) = record.as_object() else {
        return;
    };

    if let Some(url) = obj.get(FEATURED_IMAGE).and_then(Value::as_str) {
        f(FEATURED_IMAGE, url);
    }
    if let Some(images) = obj.get(IMAGES).and_then(Value::as_array) {
        for url in images.iter().filter_map(Value::as_str) {
            f(IMAGES, url);
        }
    }
    if let Some(url) = obj.get(COVER_PHOTO).and_then(Value::as_str) {
        f(COVER_PHOTO, url);
    }
    if let Some(photos) = obj.get(PHOTOS).and_then(Value::as_array) {
        for photo in photos.iter().filter_map(Value::as_object) {
            for key in PHOTO_KEYS {
                if let Some(url) = photo.get(key).and_then(Value::as_str) {
                    f(PHOTOS, url);
                }
            }
        }
    }
    if let Some(url) = obj.get(AVATAR).and_then(Value::as_str) {
        f(AVATAR, url);
    }
}

/// Call `f(field, reference)` for every reference in `record`, allowing
/// the reference to be rewritten in place.
pub fn visit_mut(record: &mut Value, mut f: impl FnMut(&'static str, &mut String)) {
    let Some(obj) = record.as_object_mut() else {
        return;
    };

    if let Some(Value::String(url)) = obj.get_mut(FEATURED_IMAGE) {
        f(FEATURED_IMAGE, url);
    }
    if let Some(Value::Array(images)) = obj.get_mut(IMAGES) {
        for item in images.iter_mut() {
            if let Value::String(url) = item {
                f(IMAGES, url);
            }
        }
    }
    if let Some(Value::String(url)) = obj.get_mut(COVER_PHOTO) {
        f(COVER_PHOTO, url);
    }
    if let Some(Value::Array(photos)) = obj.get_mut(PHOTOS) {
        for photo in photos.iter_mut().filter_map(Value::as_object_mut) {
            for key in PHOTO_KEYS {
                if let Some(Value::String(url)) = photo.get_mut(key) {
                    f(PHOTOS, url);
                }
            }
        }
    }
    if let Some(Value::String(url)) = obj.get_mut(AVATAR) {
        f(AVATAR, url);
    }
}

/// Every reference of a list-valued field item: a string in `images`, or
/// the present `url`/`thumbnailUrl` of a `photos` object.
pub fn item_refs(item: &Value) -> Vec<&str> {
    match item {
        Value::String(url) => vec![url.as_str()],
        Value::Object(photo) => PHOTO_KEYS
            .iter()
            .filter_map(|key| photo.get(*key).and_then(Value::as_str))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect(record: &Value) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        visit(record, |field, url| out.push((field, url.to_string())));
        out
    }

    #[test]
    fn test_records_by_root_shape() {
        let array = json!([{"a": 1}, {"b": 2}]);
        assert_eq!(records(&array).len(), 2);
        let object = json!({"avatarUrl": "/a.webp"});
        assert_eq!(records(&object).len(), 1);
        assert!(records(&json!("scalar")).is_empty());
    }

    #[test]
    fn test_visit_field_order() {
        // Object key order is irrelevant; visit order is fixed.
        let record = json!({
            "avatarUrl": "/e.webp",
            "photos": [{"thumbnailUrl": "/d2.webp", "url": "/d1.webp"}],
            "coverPhotoUrl": "/c.webp",
            "images": ["/b1.webp", "/b2.webp"],
            "featuredImageUrl": "/a.webp",
        });
        let urls: Vec<_> = collect(&record).into_iter().map(|(_, u)| u).collect();
        assert_eq!(
            urls,
            ["/a.webp", "/b1.webp", "/b2.webp", "/c.webp", "/d1.webp", "/d2.webp", "/e.webp"]
        );
    }

    #[test]
    fn test_visit_skips_unexpected_shapes() {
        let record = json!({
            "featuredImageUrl": 42,
            "images": "/not-a-list.webp",
            "photos": ["/string-photo.webp", {"url": null}, {"title": "x"}],
            "title": "/ignored.webp",
        });
        assert!(collect(&record).is_empty());
    }

    #[test]
    fn test_visit_mut_rewrites_in_place() {
        let mut record = json!({
            "images": ["/old/a.webp", 7],
            "photos": [{"url": "/old/b.webp"}],
        });
        visit_mut(&mut record, |_, url| {
            if let Some(rest) = url.strip_prefix("/old/") {
                *url = format!("/new/{rest}");
            }
        });
        assert_eq!(
            record,
            json!({"images": ["/new/a.webp", 7], "photos": [{"url": "/new/b.webp"}]})
        );
    }

    #[test]
    fn test_item_refs() {
        assert_eq!(item_refs(&json!("/a.webp")), vec!["/a.webp"]);
        assert_eq!(
            item_refs(&json!({"url": "/u.webp", "thumbnailUrl": "/t.webp"})),
            vec!["/u.webp", "/t.webp"]
        );
        assert!(item_refs(&json!({"title": "no refs"})).is_empty());
        assert!(item_refs(&json!(3)).is_empty());
    }
}
