use diesel::SqliteConnection;

use crate::devotion::{Devotion, Devotionable};
use crate::models::NewScripture;
use crate::DbError;

/// Translation assigned to every starter passage.
const SEED_TRANSLATION: &str = "NLT";

/// The starter catalog. Position in this list fixes `display_order`,
/// which in turn fixes where each passage falls in the daily cycle.
const SEED_PASSAGES: [(&str, i32, &str, &str); 30] = [
    ("Philippians", 4, "4-7", "Always be full of joy in the Lord. I say it again—rejoice! Let everyone see that you are considerate in all you do. Remember, the Lord is coming soon. Do not be anxious about anything, but in every situation, by prayer and petition, with thanksgiving, present your requests to God. And the peace of God, which transcends all understanding, will guard your hearts and your minds in Christ Jesus."),
    ("Psalm", 46, "5", "God is in the midst of her; she shall not be moved; God will help her when morning dawns."),
    ("Romans", 8, "28", "And we know that God causes everything to work together for the good of those who love God and are called according to his purpose for them."),
    ("Proverbs", 3, "5-6", "Trust in the Lord with all your heart; do not depend on your own understanding. Seek his will in all you do, and he will show you which path to take."),
    ("Joshua", 1, "9", "This is my command—be strong and courageous! Do not be afraid or discouraged. For the Lord your God is with you wherever you go."),
    ("Psalm", 23, "1-4", "The Lord is my shepherd; I have all that I need. He lets me rest in green meadows; he leads me beside peaceful streams. He renews my strength. He guides me along right paths, bringing honor to his name. Even when I walk through the darkest valley, I will not be afraid, for you are close beside me."),
    ("Matthew", 11, "28", "Then Jesus said, \"Come to me, all of you who are weary and carry heavy burdens, and I will give you rest.\""),
    ("1 John", 4, "7-8", "Dear friends, let us continue to love one another, for love comes from God. Anyone who loves is a child of God and knows God. But anyone who does not love does not know God, for God is love."),
    ("Jeremiah", 29, "11", "\"For I know the plans I have for you,\" says the Lord. \"They are plans for good and not for disaster, to give you a future and a hope.\""),
    ("Psalm", 27, "1", "The Lord is my light and my salvation—so why should I be afraid? The Lord is my fortress, protecting me from danger, so why should I tremble?"),
    ("Proverbs", 17, "22", "A cheerful heart is good medicine, but a broken spirit saps a person's strength."),
    ("Colossians", 3, "12-14", "Since God chose you to be the holy people he loves, you must clothe yourselves with tenderhearted mercy, kindness, humility, gentleness, and patience. Make allowance for each other's faults, and forgive anyone who offends you. Remember, the Lord forgave you, so you must forgive others. Above all, clothe yourselves with love, which binds us all together in perfect harmony."),
    ("Deuteronomy", 31, "6", "So be strong and courageous! Do not be afraid and do not panic before them. For the Lord your God will personally go ahead of you. He will neither fail you nor abandon you."),
    ("1 Peter", 5, "7", "Give all your worries and cares to God, for he cares about you."),
    ("Psalm", 37, "4", "Take delight in the Lord, and he will give you your heart's desires."),
    ("Isaiah", 40, "31", "But those who trust in the Lord will find new strength. They will soar high on wings like eagles. They will run and not grow weary. They will walk and not faint."),
    ("Ephesians", 3, "20-21", "Now all glory to God, who is able, through his mighty power at work within us, to accomplish infinitely more than we might ask or think. Glory to him in the church and in Christ Jesus through all generations forever and ever! Amen."),
    ("Proverbs", 22, "19", "So listen, my child, and do as I say, and the path of your life will be smooth."),
    ("Hebrews", 10, "35-36", "So do not throw away this confident trust in the Lord. Remember the great reward it brings you! Patient endurance is what you need now, so that you will continue to do God's will. Then you will receive all that he has promised."),
    ("Psalm", 118, "24", "This is the day the Lord has made. We will rejoice and be glad in it."),
    ("2 Corinthians", 12, "9-10", "Each time he said, \"My grace is all you need. My power works best in weakness.\" So now I am glad to boast about my weaknesses, so that the power of Christ can work through me. That's why I take pleasure in my weaknesses, and in the insults, hardships, persecutions, and troubles that I suffer for Christ. For when I am weak, then I am strong."),
    ("Romans", 15, "13", "I pray that God, the source of hope, will fill you completely with joy and peace because you trust in him. Then you will overflow with confident hope through the power of the Holy Spirit."),
    ("Proverbs", 31, "8-9", "Speak up for those who cannot speak for themselves; ensure justice for those being crushed. Yes, speak up for the poor and helpless, and see that they get justice."),
    ("Titus", 2, "11-12", "For the grace of God has been revealed, bringing salvation to all people. And we are instructed to turn from godless living and sinful pleasures. We should live in this evil world with wisdom, righteousness, and devotion to God."),
    ("2 Timothy", 1, "7", "For God has not given us a spirit of fear and timidity, but of power, love, and self-discipline."),
    ("Proverbs", 11, "25", "The generous will prosper; those who refresh others will themselves be refreshed."),
    ("1 Thessalonians", 5, "16-18", "Always be joyful. Never stop praying. Be thankful in all circumstances, for this is God's will for you who belong to Christ Jesus."),
    ("Proverbs", 8, "11", "Wisdom is more valuable than precious rubies. Nothing you desire can compare with it."),
    ("1 Corinthians", 13, "4-7", "Love is patient and kind. It is not jealous or boastful or proud or rude. It does not demand its own way. It is not irritable, and it keeps no record of being wronged. It does not rejoice about injustice but rejoices whenever the truth wins out. Love never gives up, never loses faith, is always hopeful, and endures through every circumstance."),
    ("Psalm", 139, "14", "Thank you for making me so wonderfully complex! Your workmanship is marvelous—how well I know it."),
];

/// Loads the starter catalog into an empty store.
///
/// Each passage takes its `display_order` from its position in the seed
/// list. Running against an already-seeded store fails on the first
/// duplicate `display_order` and leaves the existing rows untouched.
pub fn seed_catalog(conn: &mut SqliteConnection) -> Result<usize, DbError> {
    for (i, (book, chapter, verses, text)) in SEED_PASSAGES.iter().enumerate() {
        Devotion::add_scripture(
            NewScripture {
                book: (*book).to_string(),
                chapter: *chapter,
                verses: (*verses).to_string(),
                text: (*text).to_string(),
                translation: SEED_TRANSLATION.to_string(),
                display_order: i as i32,
            },
            conn,
        )?;
    }

    Ok(SEED_PASSAGES.len())
}
