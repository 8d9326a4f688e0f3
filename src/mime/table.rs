//! Built-in content-type table
//!
//! Canonical extension -> MIME type associations for common web, document,
//! image, audio, video and binary file types. Pure static data, built once
//! per process, never mutated.

use super::ContentTypeMapping;
use std::collections::HashMap;
use std::sync::OnceLock;

static BUILT_IN_MAPPINGS: OnceLock<HashMap<&'static str, ContentTypeMapping>> = OnceLock::new();

/// Built-in `pattern -> MIME type` pairs. Keys are unique by construction.
const BUILT_IN_TABLE: &[(&str, &str)] = &[
    // Core web assets
    ("*.js", "text/javascript"),
    ("*.css", "text/css"),
    ("*.html", "text/html"),
    ("*.json", "application/json"),
    ("*.mjs", "text/javascript"),
    ("*.xml", "text/xml"),
    ("*.htm", "text/html"),
    ("*.wasm", "application/wasm"),
    ("*.txt", "text/plain"),
    ("*.dll", "application/octet-stream"),
    ("*.pdb", "application/octet-stream"),
    ("*.dat", "application/octet-stream"),
    ("*.webmanifest", "application/manifest+json"),
    ("*.jsx", "text/jscript"),
    ("*.markdown", "text/markdown"),
    ("*.gz", "application/x-gzip"),
    ("*.br", "application/octet-stream"),
    ("*.md", "text/markdown"),
    ("*.bmp", "image/bmp"),
    ("*.jpeg", "image/jpeg"),
    ("*.jpg", "image/jpeg"),
    ("*.gif", "image/gif"),
    ("*.svg", "image/svg+xml"),
    ("*.png", "image/png"),
    ("*.webp", "image/webp"),
    ("*.otf", "font/otf"),
    ("*.woff2", "font/woff2"),
    ("*.m4v", "video/mp4"),
    ("*.mov", "video/quicktime"),
    ("*.movie", "video/x-sgi-movie"),
    ("*.mp2", "video/mpeg"),
    ("*.mp4", "video/mp4"),
    ("*.mp4v", "video/mp4"),
    ("*.mpa", "video/mpeg"),
    ("*.mpe", "video/mpeg"),
    ("*.mpeg", "video/mpeg"),
    ("*.mpg", "video/mpeg"),
    ("*.mpv2", "video/mpeg"),
    ("*.nsc", "video/x-ms-asf"),
    ("*.ogg", "video/ogg"),
    ("*.ogv", "video/ogg"),
    ("*.webm", "video/webm"),
    // Text
    ("*.323", "text/h323"),
    ("*.appcache", "text/cache-manifest"),
    ("*.asm", "text/plain"),
    ("*.bas", "text/plain"),
    ("*.c", "text/plain"),
    ("*.cnf", "text/plain"),
    ("*.cpp", "text/plain"),
    ("*.csv", "text/csv"),
    ("*.disco", "text/xml"),
    ("*.dlm", "text/dlm"),
    ("*.dtd", "text/xml"),
    ("*.etx", "text/x-setext"),
    ("*.h", "text/plain"),
    ("*.hdml", "text/x-hdml"),
    ("*.htc", "text/x-component"),
    ("*.htt", "text/webviewhtml"),
    ("*.hxt", "text/html"),
    ("*.ical", "text/calendar"),
    ("*.icalendar", "text/calendar"),
    ("*.ics", "text/calendar"),
    ("*.ifb", "text/calendar"),
    ("*.map", "text/plain"),
    ("*.mno", "text/xml"),
    ("*.odc", "text/x-ms-odc"),
    ("*.rtx", "text/richtext"),
    ("*.sct", "text/scriptlet"),
    ("*.sgml", "text/sgml"),
    ("*.tsv", "text/tab-separated-values"),
    ("*.uls", "text/iuls"),
    ("*.vbs", "text/vbscript"),
    ("*.vcf", "text/x-vcard"),
    ("*.vcs", "text/plain"),
    ("*.vml", "text/xml"),
    ("*.wml", "text/vnd.wap.wml"),
    ("*.wmls", "text/vnd.wap.wmlscript"),
    ("*.wsdl", "text/xml"),
    ("*.xdr", "text/plain"),
    ("*.xsd", "text/xml"),
    ("*.xsf", "text/xml"),
    ("*.xsl", "text/xml"),
    ("*.xslt", "text/xml"),
    ("*.woff", "application/font-woff"),
    // Images
    ("*.art", "image/x-jg"),
    ("*.cmx", "image/x-cmx"),
    ("*.cod", "image/cis-cod"),
    ("*.dib", "image/bmp"),
    ("*.ico", "image/x-icon"),
    ("*.ief", "image/ief"),
    ("*.jfif", "image/pjpeg"),
    ("*.jpe", "image/jpeg"),
    ("*.pbm", "image/x-portable-bitmap"),
    ("*.pgm", "image/x-portable-graymap"),
    ("*.pnm", "image/x-portable-anymap"),
    ("*.pnz", "image/png"),
    ("*.ppm", "image/x-portable-pixmap"),
    ("*.ras", "image/x-cmu-raster"),
    ("*.rf", "image/vnd.rn-realflash"),
    ("*.rgb", "image/x-rgb"),
    ("*.svgz", "image/svg+xml"),
    ("*.tif", "image/tiff"),
    ("*.tiff", "image/tiff"),
    ("*.wbmp", "image/vnd.wap.wbmp"),
    ("*.xbm", "image/x-xbitmap"),
    ("*.xpm", "image/x-xpixmap"),
    ("*.xwd", "image/x-xwindowdump"),
    // Video
    ("*.3g2", "video/3gpp2"),
    ("*.3gp2", "video/3gpp2"),
    ("*.3gp", "video/3gpp"),
    ("*.3gpp", "video/3gpp"),
    ("*.asf", "video/x-ms-asf"),
    ("*.asr", "video/x-ms-asf"),
    ("*.asx", "video/x-ms-asf"),
    ("*.avi", "video/x-msvideo"),
    ("*.dvr", "video/x-ms-dvr"),
    ("*.flv", "video/x-flv"),
    ("*.IVF", "video/x-ivf"),
    ("*.lsf", "video/x-la-asf"),
    ("*.lsx", "video/x-la-asf"),
    ("*.m1v", "video/mpeg"),
    ("*.m2ts", "video/vnd.dlna.mpeg-tts"),
    ("*.qt", "video/quicktime"),
    ("*.ts", "video/vnd.dlna.mpeg-tts"),
    ("*.tts", "video/vnd.dlna.mpeg-tts"),
    ("*.wm", "video/x-ms-wm"),
    ("*.wmp", "video/x-ms-wmp"),
    ("*.wmv", "video/x-ms-wmv"),
    ("*.wmx", "video/x-ms-wmx"),
    ("*.wtv", "video/x-ms-wtv"),
    ("*.wvx", "video/x-ms-wvx"),
    // Audio
    ("*.aac", "audio/aac"),
    ("*.adt", "audio/vnd.dlna.adts"),
    ("*.adts", "audio/vnd.dlna.adts"),
    ("*.aif", "audio/x-aiff"),
    ("*.aifc", "audio/aiff"),
    ("*.aiff", "audio/aiff"),
    ("*.au", "audio/basic"),
    ("*.m3u", "audio/x-mpegurl"),
    ("*.m4a", "audio/mp4"),
    ("*.mid", "audio/mid"),
    ("*.midi", "audio/mid"),
    ("*.mp3", "audio/mpeg"),
    ("*.oga", "audio/ogg"),
    ("*.ra", "audio/x-pn-realaudio"),
    ("*.ram", "audio/x-pn-realaudio"),
    ("*.rmi", "audio/mid"),
    ("*.rpm", "audio/x-pn-realaudio-plugin"),
    ("*.smd", "audio/x-smd"),
    ("*.smx", "audio/x-smd"),
    ("*.smz", "audio/x-smd"),
    ("*.snd", "audio/basic"),
    ("*.spx", "audio/ogg"),
    ("*.wav", "audio/wav"),
    ("*.wax", "audio/x-ms-wax"),
    ("*.wma", "audio/x-ms-wma"),
    // Applications and documents
    ("*.accdb", "application/msaccess"),
    ("*.accde", "application/msaccess"),
    ("*.accdt", "application/msaccess"),
    ("*.acx", "application/internet-property-stream"),
    ("*.ai", "application/postscript"),
    ("*.application", "application/x-ms-application"),
    ("*.atom", "application/atom+xml"),
    ("*.axs", "application/olescript"),
    ("*.bcpio", "application/x-bcpio"),
    ("*.cab", "application/vnd.ms-cab-compressed"),
    ("*.calx", "application/vnd.ms-office.calx"),
    ("*.cat", "application/vnd.ms-pki.seccat"),
    ("*.cdf", "application/x-cdf"),
    ("*.class", "application/x-java-applet"),
    ("*.clp", "application/x-msclip"),
    ("*.cpio", "application/x-cpio"),
    ("*.crd", "application/x-mscardfile"),
    ("*.crl", "application/pkix-crl"),
    ("*.crt", "application/x-x509-ca-cert"),
    ("*.csh", "application/x-csh"),
    ("*.dcr", "application/x-director"),
    ("*.der", "application/x-x509-ca-cert"),
    ("*.dir", "application/x-director"),
    ("*.doc", "application/msword"),
    ("*.docm", "application/vnd.ms-word.document.macroEnabled.12"),
    (
        "*.docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("*.dot", "application/msword"),
    ("*.dotm", "application/vnd.ms-word.template.macroEnabled.12"),
    (
        "*.dotx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
    ),
    ("*.dvi", "application/x-dvi"),
    ("*.dwf", "drawing/x-dwf"),
    ("*.dxr", "application/x-director"),
    ("*.eml", "message/rfc822"),
    ("*.eot", "application/vnd.ms-fontobject"),
    ("*.eps", "application/postscript"),
    ("*.evy", "application/envoy"),
    ("*.exe", "application/vnd.microsoft.portable-executable"),
    ("*.fdf", "application/vnd.fdf"),
    ("*.fif", "application/fractals"),
    ("*.flr", "x-world/x-vrml"),
    ("*.gtar", "application/x-gtar"),
    ("*.hdf", "application/x-hdf"),
    ("*.hhc", "application/x-oleobject"),
    ("*.hlp", "application/winhlp"),
    ("*.hqx", "application/mac-binhex40"),
    ("*.hta", "application/hta"),
    ("*.iii", "application/x-iphone"),
    ("*.ins", "application/x-internet-signup"),
    ("*.isp", "application/x-internet-signup"),
    ("*.jar", "application/java-archive"),
    ("*.jck", "application/liquidmotion"),
    ("*.jcz", "application/liquidmotion"),
    ("*.latex", "application/x-latex"),
    ("*.lit", "application/x-ms-reader"),
    ("*.m13", "application/x-msmediaview"),
    ("*.m14", "application/x-msmediaview"),
    ("*.man", "application/x-troff-man"),
    ("*.manifest", "application/x-ms-manifest"),
    ("*.mdb", "application/x-msaccess"),
    ("*.me", "application/x-troff-me"),
    ("*.mht", "message/rfc822"),
    ("*.mhtml", "message/rfc822"),
    ("*.mmf", "application/x-smaf"),
    ("*.mny", "application/x-msmoney"),
    ("*.mpp", "application/vnd.ms-project"),
    ("*.ms", "application/x-troff-ms"),
    ("*.mvb", "application/x-msmediaview"),
    ("*.mvc", "application/x-miva-compiled"),
    ("*.nc", "application/x-netcdf"),
    ("*.nws", "message/rfc822"),
    ("*.oda", "application/oda"),
    ("*.ods", "application/oleobject"),
    ("*.ogx", "application/ogg"),
    ("*.one", "application/onenote"),
    ("*.onea", "application/onenote"),
    ("*.onetoc", "application/onenote"),
    ("*.onetoc2", "application/onenote"),
    ("*.onetmp", "application/onenote"),
    ("*.onepkg", "application/onenote"),
    ("*.osdx", "application/opensearchdescription+xml"),
    ("*.p10", "application/pkcs10"),
    ("*.p12", "application/x-pkcs12"),
    ("*.p7b", "application/x-pkcs7-certificates"),
    ("*.p7c", "application/pkcs7-mime"),
    ("*.p7m", "application/pkcs7-mime"),
    ("*.p7r", "application/x-pkcs7-certreqresp"),
    ("*.p7s", "application/pkcs7-signature"),
    ("*.pdf", "application/pdf"),
    ("*.pfx", "application/x-pkcs12"),
    ("*.pko", "application/vnd.ms-pki.pko"),
    ("*.pma", "application/x-perfmon"),
    ("*.pmc", "application/x-perfmon"),
    ("*.pml", "application/x-perfmon"),
    ("*.pmr", "application/x-perfmon"),
    ("*.pmw", "application/x-perfmon"),
    ("*.pot", "application/vnd.ms-powerpoint"),
    ("*.potm", "application/vnd.ms-powerpoint.template.macroEnabled.12"),
    (
        "*.potx",
        "application/vnd.openxmlformats-officedocument.presentationml.template",
    ),
    ("*.ppam", "application/vnd.ms-powerpoint.addin.macroEnabled.12"),
    ("*.pps", "application/vnd.ms-powerpoint"),
    ("*.ppsm", "application/vnd.ms-powerpoint.slideshow.macroEnabled.12"),
    (
        "*.ppsx",
        "application/vnd.openxmlformats-officedocument.presentationml.slideshow",
    ),
    ("*.ppt", "application/vnd.ms-powerpoint"),
    ("*.pptm", "application/vnd.ms-powerpoint.presentation.macroEnabled.12"),
    (
        "*.pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("*.prf", "application/pics-rules"),
    ("*.ps", "application/postscript"),
    ("*.pub", "application/x-mspublisher"),
    ("*.qtl", "application/x-quicktimeplayer"),
    ("*.rm", "application/vnd.rn-realmedia"),
    ("*.roff", "application/x-troff"),
    ("*.rtf", "application/rtf"),
    ("*.scd", "application/x-msschedule"),
    ("*.setpay", "application/set-payment-initiation"),
    ("*.setreg", "application/set-registration-initiation"),
    ("*.sh", "application/x-sh"),
    ("*.shar", "application/x-shar"),
    ("*.sit", "application/x-stuffit"),
    ("*.sldm", "application/vnd.ms-powerpoint.slide.macroEnabled.12"),
    (
        "*.sldx",
        "application/vnd.openxmlformats-officedocument.presentationml.slide",
    ),
    ("*.spc", "application/x-pkcs7-certificates"),
    ("*.spl", "application/futuresplash"),
    ("*.src", "application/x-wais-source"),
    ("*.ssm", "application/streamingmedia"),
    ("*.sst", "application/vnd.ms-pki.certstore"),
    ("*.stl", "application/vnd.ms-pki.stl"),
    ("*.sv4cpio", "application/x-sv4cpio"),
    ("*.sv4crc", "application/x-sv4crc"),
    ("*.swf", "application/x-shockwave-flash"),
    ("*.t", "application/x-troff"),
    ("*.tar", "application/x-tar"),
    ("*.tcl", "application/x-tcl"),
    ("*.tex", "application/x-tex"),
    ("*.texi", "application/x-texinfo"),
    ("*.texinfo", "application/x-texinfo"),
    ("*.tgz", "application/x-compressed"),
    ("*.thmx", "application/vnd.ms-officetheme"),
    ("*.tr", "application/x-troff"),
    ("*.trm", "application/x-msterminal"),
    ("*.ttc", "application/x-font-ttf"),
    ("*.ttf", "application/x-font-ttf"),
    ("*.ustar", "application/x-ustar"),
    ("*.vdx", "application/vnd.ms-visio.viewer"),
    ("*.vsd", "application/vnd.visio"),
    ("*.vss", "application/vnd.visio"),
    ("*.vst", "application/vnd.visio"),
    ("*.vsto", "application/x-ms-vsto"),
    ("*.vsw", "application/vnd.visio"),
    ("*.vsx", "application/vnd.visio"),
    ("*.vtx", "application/vnd.visio"),
    ("*.wcm", "application/vnd.ms-works"),
    ("*.wdb", "application/vnd.ms-works"),
    ("*.wks", "application/vnd.ms-works"),
    ("*.wmd", "application/x-ms-wmd"),
    ("*.wmf", "application/x-msmetafile"),
    ("*.wmlc", "application/vnd.wap.wmlc"),
    ("*.wmlsc", "application/vnd.wap.wmlscriptc"),
    ("*.wmz", "application/x-ms-wmz"),
    ("*.wps", "application/vnd.ms-works"),
    ("*.wri", "application/x-mswrite"),
    ("*.wrl", "x-world/x-vrml"),
    ("*.wrz", "x-world/x-vrml"),
    ("*.x", "application/directx"),
    ("*.xaf", "x-world/x-vrml"),
    ("*.xaml", "application/xaml+xml"),
    ("*.xap", "application/x-silverlight-app"),
    ("*.xbap", "application/x-ms-xbap"),
    ("*.xht", "application/xhtml+xml"),
    ("*.xhtml", "application/xhtml+xml"),
    ("*.xla", "application/vnd.ms-excel"),
    ("*.xlam", "application/vnd.ms-excel.addin.macroEnabled.12"),
    ("*.xlc", "application/vnd.ms-excel"),
    ("*.xlm", "application/vnd.ms-excel"),
    ("*.xls", "application/vnd.ms-excel"),
    ("*.xlsb", "application/vnd.ms-excel.sheet.binary.macroEnabled.12"),
    ("*.xlsm", "application/vnd.ms-excel.sheet.macroEnabled.12"),
    (
        "*.xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("*.xlt", "application/vnd.ms-excel"),
    ("*.xltm", "application/vnd.ms-excel.template.macroEnabled.12"),
    (
        "*.xltx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
    ),
    ("*.xlw", "application/vnd.ms-excel"),
    ("*.xof", "x-world/x-vrml"),
    ("*.xps", "application/vnd.ms-xpsdocument"),
    ("*.z", "application/x-compress"),
    ("*.zip", "application/x-zip-compressed"),
    // Opaque binary formats
    ("*.aaf", "application/octet-stream"),
    ("*.aca", "application/octet-stream"),
    ("*.afm", "application/octet-stream"),
    ("*.asd", "application/octet-stream"),
    ("*.asi", "application/octet-stream"),
    ("*.bin", "application/octet-stream"),
    ("*.chm", "application/octet-stream"),
    ("*.cur", "application/octet-stream"),
    ("*.deploy", "application/octet-stream"),
    ("*.dsp", "application/octet-stream"),
    ("*.dwp", "application/octet-stream"),
    ("*.emz", "application/octet-stream"),
    ("*.fla", "application/octet-stream"),
    ("*.hhk", "application/octet-stream"),
    ("*.hhp", "application/octet-stream"),
    ("*.inf", "application/octet-stream"),
    ("*.java", "application/octet-stream"),
    ("*.jpb", "application/octet-stream"),
    ("*.lpk", "application/octet-stream"),
    ("*.lzh", "application/octet-stream"),
    ("*.mdp", "application/octet-stream"),
    ("*.mix", "application/octet-stream"),
    ("*.msi", "application/octet-stream"),
    ("*.mso", "application/octet-stream"),
    ("*.ocx", "application/octet-stream"),
    ("*.pcx", "application/octet-stream"),
    ("*.pcz", "application/octet-stream"),
    ("*.pfb", "application/octet-stream"),
    ("*.pfm", "application/octet-stream"),
    ("*.prm", "application/octet-stream"),
    ("*.prx", "application/octet-stream"),
    ("*.psd", "application/octet-stream"),
    ("*.psm", "application/octet-stream"),
    ("*.psp", "application/octet-stream"),
    ("*.qxd", "application/octet-stream"),
    ("*.rar", "application/octet-stream"),
    ("*.sea", "application/octet-stream"),
    ("*.smi", "application/octet-stream"),
    ("*.snp", "application/octet-stream"),
    ("*.thn", "application/octet-stream"),
    ("*.toc", "application/octet-stream"),
    ("*.u32", "application/octet-stream"),
    ("*.xsn", "application/octet-stream"),
    ("*.xtp", "application/octet-stream"),
];

/// Get the shared built-in mapping table, built on first use
///
/// # Examples
/// ```
/// use asset_mime::mime::built_in_mappings;
/// let mapping = built_in_mappings().get("*.png").unwrap();
/// assert_eq!(mapping.mime_type, "image/png");
/// ```
pub fn built_in_mappings() -> &'static HashMap<&'static str, ContentTypeMapping> {
    BUILT_IN_MAPPINGS.get_or_init(|| {
        BUILT_IN_TABLE
            .iter()
            .map(|(pattern, mime_type)| (*pattern, ContentTypeMapping::built_in(pattern, mime_type)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_lookups() {
        let table = built_in_mappings();
        assert_eq!(table.get("*.js").unwrap().mime_type, "text/javascript");
        assert_eq!(table.get("*.css").unwrap().mime_type, "text/css");
        assert_eq!(table.get("*.json").unwrap().mime_type, "application/json");
        assert_eq!(table.get("*.wasm").unwrap().mime_type, "application/wasm");
        assert_eq!(table.get("*.gz").unwrap().mime_type, "application/x-gzip");
        assert_eq!(
            table.get("*.br").unwrap().mime_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_unknown_pattern_is_absent() {
        assert!(built_in_mappings().get("*.nope").is_none());
    }

    #[test]
    fn test_keys_unique_by_construction() {
        // The declared list and the materialized map must agree in size,
        // otherwise a duplicate key silently shadowed an entry.
        assert_eq!(built_in_mappings().len(), BUILT_IN_TABLE.len());
    }

    #[test]
    fn test_all_patterns_are_extension_globs() {
        for (pattern, mime_type) in BUILT_IN_TABLE {
            assert!(pattern.starts_with("*."), "bad pattern: {pattern}");
            assert!(pattern.len() > 2, "empty extension: {pattern}");
            assert!(mime_type.contains('/'), "bad MIME type: {mime_type}");
        }
    }

    #[test]
    fn test_built_in_entries_have_no_encoding_and_priority_one() {
        for mapping in built_in_mappings().values() {
            assert_eq!(mapping.encoding, None);
            assert_eq!(mapping.priority, 1);
            assert_eq!(mapping.source_pattern, mapping.pattern);
        }
    }

    #[test]
    fn test_table_size() {
        assert!(built_in_mappings().len() > 350);
    }
}
