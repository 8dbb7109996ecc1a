table! {
    comments (id) {
        id -> Integer,
        scripture_id -> Integer,
        author_name -> Text,
        author_email -> Text,
        text -> Text,
        is_approved -> Bool,
        created_at -> Timestamp,
    }
}

table! {
    scriptures (id) {
        id -> Integer,
        book -> Text,
        chapter -> Integer,
        verses -> Text,
        text -> Text,
        translation -> Text,
        display_order -> Integer,
        background_image_url -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(comments -> scriptures (scripture_id));

allow_tables_to_appear_in_same_query!(comments, scriptures);
