//! Built-in skill table. Skill effects live in `calc::skill_contributions`;
//! this module only carries identity and level limits.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Blue,
    Brown,
    DarkBlue,
    Gold,
    Green,
    Grey,
    LightBlue,
    Orange,
    Pink,
    Purple,
    Red,
    White,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRO {
    pub id: String,
    pub short_id: u16,
    pub name: String,
    pub max_level: u8,
    pub icon: SkillIcon,
}

/// (id, short id, display name, max level, icon)
const SKILLS: &[(&str, u16, &str, u8, SkillIcon)] = &[
    ("fire_attack", 1, "Fire Attack", 5, SkillIcon::Red),
    ("water_attack", 2, "Water Attack", 5, SkillIcon::Blue),
    ("thunder_attack", 3, "Thunder Attack", 5, SkillIcon::Yellow),
    ("ice_attack", 4, "Ice Attack", 5, SkillIcon::LightBlue),
    ("dragon_attack", 5, "Dragon Attack", 5, SkillIcon::Orange),
    ("poison_attack", 6, "Poison Attack", 3, SkillIcon::Purple),
    ("paralysis_attack", 7, "Paralysis Attack", 3, SkillIcon::Gold),
    ("sleep_attack", 8, "Sleep Attack", 3, SkillIcon::LightBlue),
    ("blast_attack", 9, "Blast Attack", 3, SkillIcon::Orange),
    ("fire_resistance", 10, "Fire Resistance", 3, SkillIcon::Red),
    ("water_resistance", 11, "Water Resistance", 3, SkillIcon::Blue),
    ("thunder_resistance", 12, "Thunder Resistance", 3, SkillIcon::Yellow),
    ("ice_resistance", 13, "Ice Resistance", 3, SkillIcon::LightBlue),
    ("dragon_resistance", 14, "Dragon Resistance", 3, SkillIcon::Orange),
    ("poison_resistance", 15, "Poison Resistance", 3, SkillIcon::Purple),
    ("paralysis_resistance", 16, "Paralysis Resistance", 3, SkillIcon::Gold),
    ("sleep_resistance", 17, "Sleep Resistance", 3, SkillIcon::LightBlue),
    ("blast_resistance", 18, "Blast Resistance", 3, SkillIcon::Orange),
    ("affinity_sliding", 19, "Affinity Sliding", 1, SkillIcon::Pink),
    ("agitator", 20, "Agitator", 5, SkillIcon::Red),
    ("ammo_up", 21, "Ammo Up", 3, SkillIcon::Green),
    ("artillery", 22, "Artillery", 3, SkillIcon::Grey),
    ("attack_boost", 23, "Attack Boost", 7, SkillIcon::Red),
    ("ballistics", 24, "Ballistics", 3, SkillIcon::White),
    ("blight_resistance", 25, "Blight Resistance", 3, SkillIcon::Blue),
    ("bludgeoner", 26, "Bludgeoner", 3, SkillIcon::Grey),
    ("bombardier", 27, "Bombardier", 3, SkillIcon::Orange),
    ("botanist", 28, "Botanist", 4, SkillIcon::Green),
    ("bow_charge_plus", 29, "Bow Charge Plus", 1, SkillIcon::Green),
    ("bubbly_dance", 30, "Bubbly Dance", 3, SkillIcon::White),
    ("capture_master", 31, "Capture Master", 1, SkillIcon::Pink),
    ("carving_master", 32, "Carving Master", 1, SkillIcon::Green),
    ("carving_pro", 33, "Carving Pro", 1, SkillIcon::Grey),
    ("chameleos_blessing", 34, "Chameleos Blessing", 4, SkillIcon::Purple),
    ("constitution", 35, "Constitution", 5, SkillIcon::Gold),
    ("counterstrike", 36, "Counterstrike", 3, SkillIcon::Red),
    ("critical_boost", 37, "Critical Boost", 3, SkillIcon::Pink),
    ("critical_draw", 38, "Critical Draw", 3, SkillIcon::Pink),
    ("critical_element", 39, "Critical Element", 3, SkillIcon::DarkBlue),
    ("critical_eye", 40, "Critical Eye", 7, SkillIcon::Pink),
    ("defense_boost", 41, "Defense Boost", 7, SkillIcon::Gold),
    ("diversion", 42, "Diversion", 1, SkillIcon::Purple),
    ("divine_blessing", 43, "Divine Blessing", 3, SkillIcon::White),
    ("dragonheart", 44, "Dragonheart", 5, SkillIcon::Orange),
    ("earplugs", 45, "Earplugs", 5, SkillIcon::White),
    ("evade_extender", 46, "Evade Extender", 3, SkillIcon::LightBlue),
    ("evade_window", 47, "Evade Window", 5, SkillIcon::LightBlue),
    ("flinch_free", 48, "Flinch Free", 3, SkillIcon::Grey),
    ("focus", 49, "Focus", 3, SkillIcon::White),
    ("fortify", 50, "Fortify", 1, SkillIcon::Orange),
    ("free_meal", 51, "Free Meal", 3, SkillIcon::Brown),
    ("geologist", 52, "Geologist", 3, SkillIcon::Brown),
    ("good_luck", 53, "Good Luck", 3, SkillIcon::Yellow),
    ("guard", 54, "Guard", 5, SkillIcon::Grey),
    ("guard_up", 55, "Guard Up", 3, SkillIcon::White),
    ("handicraft", 56, "Handicraft", 5, SkillIcon::DarkBlue),
    ("hellfire_cloak", 57, "Hellfire Cloak", 4, SkillIcon::Purple),
    ("heroics", 58, "Heroics", 5, SkillIcon::Red),
    ("horn_maestro", 59, "Horn Maestro", 1, SkillIcon::Green),
    ("hunger_resistance", 60, "Hunger Resistance", 3, SkillIcon::Gold),
    ("item_prolonger", 61, "Item Prolonger", 3, SkillIcon::Brown),
    ("jump_master", 62, "Jump Master", 1, SkillIcon::Blue),
    ("kushala_blessing", 63, "Kushala Blessing", 4, SkillIcon::Grey),
    ("latent_power", 64, "Latent Power", 5, SkillIcon::Pink),
    ("leap_of_faith", 65, "Leap Of Faith", 1, SkillIcon::LightBlue),
    ("load_shells", 66, "Load Shells", 2, SkillIcon::Grey),
    ("marathon_runner", 67, "Marathon Runner", 3, SkillIcon::Gold),
    ("master_mounter", 68, "Master Mounter", 1, SkillIcon::Blue),
    ("masters_touch", 69, "Master's Touch", 3, SkillIcon::White),
    ("maximum_might", 70, "Maximum Might", 3, SkillIcon::Pink),
    ("minds_eye", 71, "Mind's Eye", 3, SkillIcon::White),
    ("muck_resistance", 72, "Muck Resistance", 2, SkillIcon::Grey),
    ("mushroomancer", 73, "Mushroomancer", 3, SkillIcon::Purple),
    ("normal_rapid_up", 74, "Normal/Rapid Up", 3, SkillIcon::White),
    ("offensive_guard", 75, "Offensive Guard", 3, SkillIcon::Purple),
    ("partbreaker", 76, "Partbreaker", 3, SkillIcon::Grey),
    ("peak_performance", 77, "Peak Performance", 3, SkillIcon::Red),
    ("pierce_up", 78, "Pierce Up", 3, SkillIcon::Blue),
    ("power_prolonger", 79, "Power Prolonger", 3, SkillIcon::Brown),
    ("protective_polish", 80, "Protective Polish", 3, SkillIcon::Yellow),
    ("punishing_draw", 81, "Punishing Draw", 3, SkillIcon::Yellow),
    ("quick_sheath", 82, "Quick Sheath", 3, SkillIcon::Brown),
    ("rapid_fire_up", 83, "Rapid Fire Up", 3, SkillIcon::White),
    ("rapid_morph", 84, "Rapid Morph", 3, SkillIcon::Blue),
    ("razor_sharp", 85, "Razor Sharp", 3, SkillIcon::Yellow),
    ("recoil_down", 86, "Recoil Down", 3, SkillIcon::Brown),
    ("recovery_speed", 87, "Recovery Speed", 3, SkillIcon::Green),
    ("recovery_up", 88, "Recovery Up", 3, SkillIcon::Green),
    ("reload_speed", 89, "Reload Speed", 3, SkillIcon::White),
    ("resentment", 90, "Resentment", 5, SkillIcon::Orange),
    ("resuscitate", 91, "Resuscitate", 3, SkillIcon::Orange),
    ("slugger", 92, "Slugger", 3, SkillIcon::Yellow),
    ("spare_shot", 93, "Spare Shot", 3, SkillIcon::Yellow),
    ("special_ammo_boost", 94, "Special Ammo Boost", 2, SkillIcon::Grey),
    ("speed_eating", 95, "Speed Eating", 3, SkillIcon::Gold),
    ("speed_sharpening", 96, "Speed Sharpening", 3, SkillIcon::Yellow),
    ("spread_up", 97, "Spread Up", 3, SkillIcon::Grey),
    ("stamina_surge", 98, "Stamina Surge", 3, SkillIcon::Gold),
    ("stamina_thief", 99, "Stamina Thief", 3, SkillIcon::DarkBlue),
    ("steadiness", 100, "Steadiness", 2, SkillIcon::Grey),
    ("stormsoul", 101, "Stormsoul", 5, SkillIcon::Orange),
    ("stun_resistance", 102, "Stun Resistance", 3, SkillIcon::Yellow),
    ("teostra_blessing", 103, "Teostra Blessing", 4, SkillIcon::Red),
    ("thunder_alignment", 104, "Thunder Alignment", 5, SkillIcon::Yellow),
    ("tremor_resistance", 105, "Tremor Resistance", 3, SkillIcon::Grey),
    ("wall_runner", 106, "Wall Runner", 3, SkillIcon::Green),
    ("weakness_exploit", 107, "Weakness Exploit", 3, SkillIcon::Pink),
    ("wide_range", 108, "Wide Range", 5, SkillIcon::White),
    ("wind_alignment", 109, "Wind Alignment", 5, SkillIcon::LightBlue),
    ("windproof", 110, "Windproof", 3, SkillIcon::White),
    ("wirebug_whisperer", 111, "Wirebug Whisperer", 3, SkillIcon::LightBlue),
];

pub fn builtin_skills() -> BTreeMap<String, SkillRO> {
    SKILLS
        .iter()
        .map(|&(id, short_id, name, max_level, icon)| {
            (
                id.to_string(),
                SkillRO {
                    id: id.to_string(),
                    short_id,
                    name: name.to_string(),
                    max_level,
                    icon,
                },
            )
        })
        .collect()
}
