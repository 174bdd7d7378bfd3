//! Phong material properties and the append-only catalog they live in.

use cgmath::Vector3;

/// Lighting response of a surface, addressed by `tag`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: &str,
        ambient_color: [f32; 3],
        ambient_strength: f32,
        diffuse_color: [f32; 3],
        specular_color: [f32; 3],
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            ambient_color: ambient_color.into(),
            ambient_strength,
            diffuse_color: diffuse_color.into(),
            specular_color: specular_color.into(),
            shininess,
        }
    }

    pub fn gold() -> Self {
        Self::new(
            "gold",
            [0.24725, 0.1995, 0.0745],
            0.1,
            [0.75164, 0.60648, 0.22648],
            [0.628281, 0.555802, 0.366065],
            51.2,
        )
    }

    pub fn silver() -> Self {
        Self::new(
            "silver",
            [0.19225, 0.19225, 0.19225],
            0.1,
            [0.50754, 0.50754, 0.50754],
            [0.508273, 0.508273, 0.508273],
            51.2,
        )
    }
}

/// White, mostly diffuse surface. Also what an unresolved material lookup pushes.
impl Default for Material {
    fn default() -> Self {
        Self::new(
            "default",
            [1.0, 1.0, 1.0],
            0.1,
            [1.0, 1.0, 1.0],
            [0.5, 0.5, 0.5],
            32.0,
        )
    }
}

/// Ordered list of materials, searched front to back.
///
/// Nothing is ever removed or replaced. Defining a tag twice keeps both
/// entries and the first one wins every lookup.
#[derive(Clone, Debug, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the built-in `default`, `gold` and `silver` materials.
    ///
    /// Calling this twice appends them twice.
    pub fn define_defaults(&mut self) {
        self.materials.push(Material::default());
        self.materials.push(Material::gold());
        self.materials.push(Material::silver());
    }

    pub fn define(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// Copy the first material tagged `tag` into `out`.
    ///
    /// Returns `false` only when the catalog is empty. On a non-empty catalog
    /// it returns `true` whether or not `tag` matched, and leaves `out`
    /// untouched on a miss. Use [`get`](Self::get) to tell a miss apart.
    pub fn find(&self, tag: &str, out: &mut Material) -> bool {
        if self.materials.is_empty() {
            return false;
        }
        if let Some(material) = self.get(tag) {
            out.ambient_color = material.ambient_color;
            out.ambient_strength = material.ambient_strength;
            out.diffuse_color = material.diffuse_color;
            out.specular_color = material.specular_color;
            out.shininess = material.shininess;
        }
        true
    }

    pub fn get(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_contain_gold_with_its_shininess() {
        let mut catalog = MaterialCatalog::new();
        catalog.define_defaults();
        let mut out = Material::default();
        assert!(catalog.find("gold", &mut out));
        assert_eq!(out.shininess, 51.2);
        assert_eq!(out.diffuse_color, Vector3::new(0.75164, 0.60648, 0.22648));
    }

    #[test]
    fn find_on_empty_catalog_is_false() {
        let catalog = MaterialCatalog::new();
        let mut out = Material::silver();
        assert!(!catalog.find("silver", &mut out));
        assert_eq!(out, Material::silver());
    }

    #[test]
    fn find_reports_true_for_unknown_tag_and_keeps_output() {
        let mut catalog = MaterialCatalog::new();
        catalog.define_defaults();
        let mut out = Material::new("scratch", [0.0; 3], 0.7, [0.0; 3], [0.0; 3], 4.0);
        let before = out.clone();
        assert!(catalog.find("marble", &mut out));
        assert_eq!(out, before);
        assert!(catalog.get("marble").is_none());
    }

    #[test]
    fn find_copies_fields_but_not_the_tag() {
        let mut catalog = MaterialCatalog::new();
        catalog.define_defaults();
        let mut out = Material::new("scratch", [0.0; 3], 0.0, [0.0; 3], [0.0; 3], 0.0);
        catalog.find("silver", &mut out);
        assert_eq!(out.tag, "scratch");
        assert_eq!(out.ambient_color, Material::silver().ambient_color);
    }

    #[test]
    fn defining_defaults_twice_duplicates_and_first_wins() {
        let mut catalog = MaterialCatalog::new();
        catalog.define_defaults();
        let fake_gold = Material::new("gold", [1.0; 3], 1.0, [1.0; 3], [1.0; 3], 1.0);
        catalog.define(fake_gold);
        catalog.define_defaults();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get("gold"), Some(&Material::gold()));
    }
}
