//! Literature table of Local Group members.
//!
//! Coordinates are J2000.0 equatorial, distances and sizes in kiloparsecs.
//! Compiled from the Caltech NED Local Group database (Mateo 1998 table),
//! McConnachie 2012, and NED distance measurements.

/// Attribution carried by every assembled record
pub const SOURCE: &str = "Caltech NED / McConnachie 2012";
pub const SOURCE_URL: &str = "https://ned.ipac.caltech.edu/level5/Mateo/table1.html";
pub const CITATION: &str = "McConnachie, A. W. 2012, AJ, 144, 4";

/// One row of the static table, before parsing and projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyEntry {
    pub name: &'static str,
    pub alternate_names: &'static [&'static str],
    pub morphological_type: &'static str,
    pub ra: &'static str,
    pub dec: &'static str,
    pub distance_kpc: f64,
    pub size_estimate_kpc: f64,
    pub notes: &'static str,
}

pub const LOCAL_GROUP: &[GalaxyEntry] = &[
    // Major Galaxies
    GalaxyEntry {
        name: "Milky Way",
        alternate_names: &["MW", "Galaxy"],
        morphological_type: "SBbc",
        ra: "17:45:40",
        dec: "-29:00:28",
        distance_kpc: 0.0,
        size_estimate_kpc: 50.0,
        notes: "Our home galaxy",
    },
    GalaxyEntry {
        name: "Andromeda (M31)",
        alternate_names: &["M31", "NGC 224"],
        morphological_type: "Sb",
        ra: "00:42:44.3",
        dec: "+41:16:09",
        distance_kpc: 770.0,
        size_estimate_kpc: 110.0,
        notes: "Nearest large galaxy to Milky Way",
    },
    GalaxyEntry {
        name: "Triangulum (M33)",
        alternate_names: &["M33", "NGC 598"],
        morphological_type: "Sc",
        ra: "01:33:50.9",
        dec: "+30:39:37",
        distance_kpc: 870.0,
        size_estimate_kpc: 30.0,
        notes: "Third-largest Local Group galaxy",
    },
    // Milky Way Satellites
    GalaxyEntry {
        name: "Large Magellanic Cloud",
        alternate_names: &["LMC"],
        morphological_type: "Irr",
        ra: "05:23:34",
        dec: "-69:45:22",
        distance_kpc: 50.0,
        size_estimate_kpc: 9.9,
        notes: "Largest MW satellite",
    },
    GalaxyEntry {
        name: "Small Magellanic Cloud",
        alternate_names: &["SMC", "NGC 292"],
        morphological_type: "Irr",
        ra: "00:52:38",
        dec: "-72:48:01",
        distance_kpc: 61.0,
        size_estimate_kpc: 5.8,
        notes: "Second-largest MW satellite",
    },
    GalaxyEntry {
        name: "Sagittarius Dwarf",
        alternate_names: &["Sgr dSph"],
        morphological_type: "dSph",
        ra: "18:55:03",
        dec: "-30:28:42",
        distance_kpc: 26.0,
        size_estimate_kpc: 5.0,
        notes: "Currently merging with MW",
    },
    GalaxyEntry {
        name: "Ursa Minor Dwarf",
        alternate_names: &["UMi dSph"],
        morphological_type: "dSph",
        ra: "15:09:11",
        dec: "+67:13:00",
        distance_kpc: 76.0,
        size_estimate_kpc: 0.44,
        notes: "Classical dwarf spheroidal",
    },
    GalaxyEntry {
        name: "Draco Dwarf",
        alternate_names: &["Dra dSph"],
        morphological_type: "dSph",
        ra: "17:20:19",
        dec: "+57:54:48",
        distance_kpc: 82.0,
        size_estimate_kpc: 0.71,
        notes: "Classical dwarf spheroidal",
    },
    GalaxyEntry {
        name: "Sculptor Dwarf",
        alternate_names: &["Scl dSph"],
        morphological_type: "dSph",
        ra: "01:00:09",
        dec: "-33:42:33",
        distance_kpc: 86.0,
        size_estimate_kpc: 0.94,
        notes: "Classical dwarf spheroidal",
    },
    GalaxyEntry {
        name: "Carina Dwarf",
        alternate_names: &["Car dSph"],
        morphological_type: "dSph",
        ra: "06:41:37",
        dec: "-50:57:58",
        distance_kpc: 105.0,
        size_estimate_kpc: 0.55,
        notes: "Classical dwarf spheroidal",
    },
    GalaxyEntry {
        name: "Sextans Dwarf",
        alternate_names: &["Sex dSph"],
        morphological_type: "dSph",
        ra: "10:13:03",
        dec: "-01:36:53",
        distance_kpc: 86.0,
        size_estimate_kpc: 1.62,
        notes: "Classical dwarf spheroidal",
    },
    GalaxyEntry {
        name: "Fornax Dwarf",
        alternate_names: &["For dSph"],
        morphological_type: "dSph",
        ra: "02:39:59",
        dec: "-34:26:57",
        distance_kpc: 147.0,
        size_estimate_kpc: 2.1,
        notes: "Classical dwarf spheroidal with GCs",
    },
    GalaxyEntry {
        name: "Leo I",
        alternate_names: &["Leo I dSph"],
        morphological_type: "dSph",
        ra: "10:08:28",
        dec: "+12:18:23",
        distance_kpc: 254.0,
        size_estimate_kpc: 0.51,
        notes: "Classical dwarf spheroidal",
    },
    GalaxyEntry {
        name: "Leo II",
        alternate_names: &["Leo II dSph"],
        morphological_type: "dSph",
        ra: "11:13:29",
        dec: "+22:09:11",
        distance_kpc: 233.0,
        size_estimate_kpc: 0.35,
        notes: "Classical dwarf spheroidal",
    },
    // Andromeda Satellites
    GalaxyEntry {
        name: "M32",
        alternate_names: &["NGC 221"],
        morphological_type: "cE",
        ra: "00:42:41.8",
        dec: "+40:51:55",
        distance_kpc: 805.0,
        size_estimate_kpc: 2.5,
        notes: "Compact elliptical, M31 satellite",
    },
    GalaxyEntry {
        name: "M110",
        alternate_names: &["NGC 205"],
        morphological_type: "dE",
        ra: "00:40:22.1",
        dec: "+41:41:07",
        distance_kpc: 810.0,
        size_estimate_kpc: 5.2,
        notes: "Dwarf elliptical, M31 satellite",
    },
    GalaxyEntry {
        name: "NGC 147",
        alternate_names: &["DDO 3"],
        morphological_type: "dE",
        ra: "00:33:12.1",
        dec: "+48:30:32",
        distance_kpc: 725.0,
        size_estimate_kpc: 2.3,
        notes: "M31 satellite",
    },
    GalaxyEntry {
        name: "NGC 185",
        alternate_names: &[],
        morphological_type: "dE",
        ra: "00:38:58.0",
        dec: "+48:20:15",
        distance_kpc: 620.0,
        size_estimate_kpc: 2.0,
        notes: "M31 satellite",
    },
    GalaxyEntry {
        name: "Andromeda I",
        alternate_names: &["And I"],
        morphological_type: "dSph",
        ra: "00:45:42",
        dec: "+38:02:28",
        distance_kpc: 745.0,
        size_estimate_kpc: 0.78,
        notes: "M31 dwarf spheroidal satellite",
    },
    GalaxyEntry {
        name: "Andromeda II",
        alternate_names: &["And II"],
        morphological_type: "dSph",
        ra: "01:16:30",
        dec: "+33:25:09",
        distance_kpc: 655.0,
        size_estimate_kpc: 1.27,
        notes: "M31 dwarf spheroidal satellite",
    },
    GalaxyEntry {
        name: "Andromeda III",
        alternate_names: &["And III"],
        morphological_type: "dSph",
        ra: "00:35:34",
        dec: "+36:29:52",
        distance_kpc: 748.0,
        size_estimate_kpc: 0.71,
        notes: "M31 dwarf spheroidal satellite",
    },
    // Other Local Group Members
    GalaxyEntry {
        name: "IC 10",
        alternate_names: &[],
        morphological_type: "Irr",
        ra: "00:20:17.3",
        dec: "+59:18:14",
        distance_kpc: 660.0,
        size_estimate_kpc: 1.5,
        notes: "Irregular starburst galaxy",
    },
    GalaxyEntry {
        name: "IC 1613",
        alternate_names: &[],
        morphological_type: "Irr",
        ra: "01:04:47.8",
        dec: "+02:07:04",
        distance_kpc: 755.0,
        size_estimate_kpc: 3.2,
        notes: "Isolated irregular galaxy",
    },
    GalaxyEntry {
        name: "NGC 6822",
        alternate_names: &["Barnard's Galaxy"],
        morphological_type: "Irr",
        ra: "19:44:56.6",
        dec: "-14:47:51",
        distance_kpc: 490.0,
        size_estimate_kpc: 2.3,
        notes: "Barred irregular galaxy",
    },
    GalaxyEntry {
        name: "WLM",
        alternate_names: &["Wolf-Lundmark-Melotte"],
        morphological_type: "Irr",
        ra: "00:01:58.2",
        dec: "-15:27:39",
        distance_kpc: 970.0,
        size_estimate_kpc: 2.0,
        notes: "Isolated dwarf irregular",
    },
    GalaxyEntry {
        name: "Pegasus Dwarf",
        alternate_names: &["DDO 216"],
        morphological_type: "Irr",
        ra: "23:28:36.3",
        dec: "+14:44:35",
        distance_kpc: 920.0,
        size_estimate_kpc: 2.2,
        notes: "Irregular dwarf galaxy",
    },
    GalaxyEntry {
        name: "Aquarius Dwarf",
        alternate_names: &["DDO 210"],
        morphological_type: "Irr",
        ra: "20:46:51.8",
        dec: "-12:50:53",
        distance_kpc: 1030.0,
        size_estimate_kpc: 1.9,
        notes: "Isolated dwarf irregular",
    },
    GalaxyEntry {
        name: "Sagittarius DIG",
        alternate_names: &["SagDIG"],
        morphological_type: "Irr",
        ra: "19:29:59.0",
        dec: "-17:40:41",
        distance_kpc: 1065.0,
        size_estimate_kpc: 1.5,
        notes: "Dwarf irregular galaxy",
    },
    GalaxyEntry {
        name: "Leo A",
        alternate_names: &["DDO 69", "Leo III"],
        morphological_type: "Irr",
        ra: "09:59:26.5",
        dec: "+30:44:47",
        distance_kpc: 798.0,
        size_estimate_kpc: 1.5,
        notes: "Gas-rich dwarf irregular",
    },
    GalaxyEntry {
        name: "Phoenix Dwarf",
        alternate_names: &[],
        morphological_type: "Irr",
        ra: "01:51:06.3",
        dec: "-44:26:41",
        distance_kpc: 415.0,
        size_estimate_kpc: 1.1,
        notes: "Dwarf irregular galaxy",
    },
    GalaxyEntry {
        name: "Tucana Dwarf",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "22:41:49",
        dec: "-64:25:12",
        distance_kpc: 870.0,
        size_estimate_kpc: 0.55,
        notes: "Isolated dwarf spheroidal",
    },
    GalaxyEntry {
        name: "Cetus Dwarf",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "00:26:11",
        dec: "-11:02:40",
        distance_kpc: 775.0,
        size_estimate_kpc: 0.75,
        notes: "Isolated dwarf spheroidal",
    },
    // Ultra-faint dwarfs (discovered more recently)
    GalaxyEntry {
        name: "Segue 1",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "10:07:04",
        dec: "+16:04:55",
        distance_kpc: 23.0,
        size_estimate_kpc: 0.029,
        notes: "Ultra-faint dwarf, most dark matter dominated",
    },
    GalaxyEntry {
        name: "Boötes I",
        alternate_names: &["Boo I"],
        morphological_type: "dSph",
        ra: "14:00:06",
        dec: "+14:30:00",
        distance_kpc: 60.0,
        size_estimate_kpc: 0.24,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Ursa Major I",
        alternate_names: &["UMa I"],
        morphological_type: "dSph",
        ra: "10:34:53",
        dec: "+51:55:12",
        distance_kpc: 97.0,
        size_estimate_kpc: 0.32,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Ursa Major II",
        alternate_names: &["UMa II"],
        morphological_type: "dSph",
        ra: "08:51:30",
        dec: "+63:07:48",
        distance_kpc: 32.0,
        size_estimate_kpc: 0.14,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Leo IV",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "11:32:57",
        dec: "-00:32:00",
        distance_kpc: 154.0,
        size_estimate_kpc: 0.21,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Leo V",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "11:31:09",
        dec: "+02:13:12",
        distance_kpc: 178.0,
        size_estimate_kpc: 0.13,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Canes Venatici I",
        alternate_names: &["CVn I"],
        morphological_type: "dSph",
        ra: "13:28:03",
        dec: "+33:33:21",
        distance_kpc: 218.0,
        size_estimate_kpc: 0.55,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Canes Venatici II",
        alternate_names: &["CVn II"],
        morphological_type: "dSph",
        ra: "12:57:10",
        dec: "+34:19:15",
        distance_kpc: 160.0,
        size_estimate_kpc: 0.22,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Hercules",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "16:31:02",
        dec: "+12:47:30",
        distance_kpc: 138.0,
        size_estimate_kpc: 0.33,
        notes: "Ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Leo T",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "09:34:53",
        dec: "+17:03:05",
        distance_kpc: 417.0,
        size_estimate_kpc: 0.18,
        notes: "Gas-rich ultra-faint dwarf",
    },
    GalaxyEntry {
        name: "Coma Berenices",
        alternate_names: &[],
        morphological_type: "dSph",
        ra: "12:26:59",
        dec: "+23:54:15",
        distance_kpc: 44.0,
        size_estimate_kpc: 0.08,
        notes: "Ultra-faint dwarf",
    },
];
