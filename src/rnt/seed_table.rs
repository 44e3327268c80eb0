//! Built-in seed words copied into every fresh entropy table.
//!
//! The first 512 words form the 4096-byte bootstrap table; the rest is
//! read margin so bit reads near the end never run off the slice.

/// Number of words in [`SEED_WORDS`].
pub const SEED_WORD_COUNT: usize = 1068;

/// Immutable seed table. Always copied, never mutated in place.
#[rustfmt::skip]
pub const SEED_WORDS: [u64; SEED_WORD_COUNT] = [
    0x7384b2ed6c6bf279, 0xeb866bfbf6d4c441, 0x1d945932fddfb184, 0x3fc3bbeefef55230,
    0x9a38a4f05ad8d95d, 0x942b8fe0ce7e7762, 0x83d7ac771e3e2265, 0x4e6455ead65351a1,
    0xa56509985e1f7146, 0x7b683b71d1aef4b4, 0x505449accb49cdfc, 0x2608d46174f356af,
    0x39a6dff140bcc1ea, 0xe18979b0b75f238f, 0xa8a5db2c9cb6578e, 0x5313dea4c3e5f10d,
    0x0cbcd46dec216e9e, 0xef4cb4b1bfff6d1b, 0xed5ecf25629ab14c, 0x75e9a94cad279bb5,
    0x51eb301e612f9526, 0x2208363b6ebf7ba1, 0x2b194a62a9c8c757, 0xaa204c1bb52cb9dc,
    0x4325528c2605752a, 0xeaba5db8efb19cab, 0x21cf809a3a0af108, 0x608e522d01afe4e9,
    0xc13d5ebc4838c904, 0xf1de01df89da29bb, 0x2cf12a85edb98ed3, 0xecbf319662585255,
    0x985ad0a5bacef579, 0xcf1eea3c8e6115e2, 0xcbf28e00d8c73289, 0x63ac767fe240ee06,
    0xc3ce5cf52248b98b, 0xbc2a222660d0cf82, 0x3995ae2edf270956, 0x5d6f3d8b08fe45f3,
    0xd2725a4f81cf6c23, 0xcb4d513b0171b326, 0x2b54b44c5516e546, 0xa2d4eafb2c78ee06,
    0x89fed8b3c86e8b11, 0x34886570902589ac, 0xbb99b0804a2c3bb2, 0x940c9204c7c273d0,
    0xb802be7bd3c6b72b, 0xde621aab582d3aea, 0xc8efc579501ac501, 0x62c940b2d0a973f8,
    0x3e03cc5165f4f43b, 0xa3e4e57b5a2614e5, 0x1c45a6f17cbc00b5, 0x082eb40bd4d09ee7,
    0x921947b9a4112b11, 0xbd161b7c183c3ac9, 0xf486225e094be9a9, 0x2f899da334124049,
    0x42c36e4b4b0e2b7b, 0x2412103edc660087, 0x6c671156ef9d11d7, 0x5ce813a03df2af2f,
    0xfe96eec8d457f014, 0x2865b570ad48e873, 0x33a350f420f5e5d5, 0x930826843c73dfa9,
    0x6ad6b719aa0ecd3a, 0xba9e04880276c01c, 0xee3ad6898e999025, 0xb3fb66a89d045d46,
    0x7c84e6dd65981d10, 0x0945d81faeb1083d, 0x74e3bd1b8ade7c4a, 0xc4de31fe865ce62b,
    0x288a7354014ef4a6, 0xb7c9ac5843b41107, 0x4e1e9516a069e97a, 0xff7d113b87571277,
    0x827a6e3770d9d0c1, 0x883398f90c13b10c, 0xcee8cacc7c64ee29, 0x956f0fdc4d9db377,
    0xa8a597fbf4d1e02a, 0xa9964227c8a217c9, 0xb3b79b81899502dd, 0x648a235743c1c4f9,
    0x5ae014c4bd348b1c, 0x33acbaee85434353, 0x2e439e46fdd7a6ac, 0x2b6dab919ae622df,
    0x7832e74dc5919c6b, 0xaf307cbaa7dc92da, 0x8bd2d8e716632f89, 0xa6bbd3750a61664a,
    0xc813b95a91c7d9ef, 0xfce708ff687459e2, 0xfb621c8bdee9e0db, 0x2c513bb2473fc9bc,
    0x0891340a7263dcf6, 0xed89a7ea5dd688f7, 0x6f1ae9b90807dae6, 0x6964adc2ba4658f0,
    0xe9f850ecf46dbc95, 0xaf5e5ef59fe0a8c4, 0xf2d2c4f1b0500968, 0x0f7ea7787faa5228,
    0xb593488741ece442, 0xc02a22908d25aea3, 0xe731e9258b3bb466, 0x7c37d9182c9a117b,
    0xc39504c9d4f68092, 0xf01d7c52d0170a97, 0xbd95a07f610012a7, 0xf1d8448174fd1dcd,
    0xe9dab00f214ea5dc, 0xd80f8cb6285bd403, 0x75a03d2faa81d204, 0xcdb0f2e35a9da97d,
    0x8282cb48a8059f40, 0x7bee30546cddf801, 0x45f42b5b3a87b2df, 0xbce169f9201ca4f2,
    0xa55237ee644d569a, 0x76a8a553db0c833e, 0x7a70c5701dc3058e, 0xbffc3774578b9311,
    0xeb0020b35c831c5e, 0x643fccb5cc66a9bf, 0x6e4a31cf6201d7fa, 0x534b0f8d7527bf16,
    0x2e4ba06e22810ac0, 0x861ce14ce6b818d3, 0x1c4c320e2e28400a, 0xc0d27bcea0a3c86c,
    0x420ee59cc4ff1bc8, 0xdcf7f36743ef2ea3, 0x05c5fd93aa07fa96, 0xdec9135fac244f0a,
    0xa8c2d5bc36a7cebc, 0x031d905e8217057c, 0xe59fbb41f59ac25a, 0x4fd3c6bd0b1dee26,
    0xcc752478c352d219, 0xd3d9c16c42ed4078, 0x2919275a28a1b81c, 0x8a4df511489c8177,
    0x067ee6e9ad72e9af, 0x9f7f527dbe6027ab, 0x8d3f841462e379a8, 0x293345fd1277cb52,
    0xda1b1ee80fa6878e, 0x1e99af339f13e01d, 0x63dc9478f152e161, 0xe1d8bc5e366cd6f1,
    0xa5d4d58220b4af3b, 0x3ec2298593aeeca7, 0x45d1861316248168, 0x3ccedd107f3b4356,
    0xe9877c73d063c09a, 0xe08a2aa0bde9dd7b, 0xc6530963c15274ea, 0x52582cab24d3c2b7,
    0x569755559908d241, 0x32cd2afe3636aa48, 0x44278f7068e06ec6, 0xd19266da3da02504,
    0x005c52eb0b6a7e7a, 0x2a029c955e5ae5d9, 0x983f80afc302fd58, 0x94d03718c0caf97a,
    0x3d276875f62008fe, 0xd672616dcb664f4d, 0x098830a74e22c2f5, 0x176fb552cfe19535,
    0xee6638fe85eba906, 0x50065ae8ff456b1b, 0xd3418b3c4947addd, 0xe9effefd7c9831e3,
    0x38b926f0b1044725, 0xa7e7cf76a15b950e, 0xaad6f1354933f9ed, 0x71904f440ee397fe,
    0xc62cc1523b0d4d95, 0xc34397d4f071ad3a, 0x1850ebc75770b6cb, 0x77f743c5fbfbda29,
    0x42d36a229644c012, 0x5c881526c130ccc0, 0xe4b9f6e4d8103f51, 0xbd2d80206abc7697,
    0x7b6723684ca87b21, 0x6fd7f75fd33a66ee, 0x76f588ca8b337cdc, 0xf9f3d674f1438324,
    0x6280ea5327ac072d, 0x33d181f9927bdde7, 0x0791b5d2bdcb689c, 0xc293b4580d3a6777,
    0xb405ac4f0c73479a, 0x5626492bbd8b5376, 0xa99fbf624da45293, 0x2d71fb7bb4479579,
    0x9fa183409e05c4ae, 0xf63f203223030c42, 0xef1c99697e2fdcaa, 0xc0868b6d8e705c0d,
    0x4e018e221b46aba9, 0x52f633da72c1fbd0, 0x940a64e349d5b89b, 0x6fb95eb1bddca185,
    0x676a8de1137f8fae, 0xa74c75c5e8169c72, 0xd2f155fdf5145deb, 0xb01eee32459e88e4,
    0x2c899971b64f591d, 0xbfe63715e0d488fe, 0x01a59d116154e740, 0xb8a0a7608d4f9a45,
    0x83f944f02dbcf6a1, 0x0818ab6c279bea47, 0x31bd3d37a132d453, 0xf2ee49caf9845839,
    0x8963b2b4a4ba45b1, 0x6b74a0e255c27f65, 0x8d8ea41d762fc376, 0x6fac6520139f0a28,
    0x751bb895d2928ab4, 0x90df64b2458665ad, 0x1c9f1b68e0481738, 0x3e2b1dea437509ac,
    0x12d31cdbcb8826ae, 0xe0bd4040f17c66e0, 0x78a0d4705f115e34, 0x1706738e3d0e6d3f,
    0x1feb2b4aa6209b01, 0xcddce02f10bf51b4, 0xab67c0eec11f9c71, 0xacd1a51b6943a5f3,
    0x72355916f11185df, 0xc070239b48fab29b, 0x345ba91e5e34b7a6, 0x8580a13047720c67,
    0x5642ec45727a474a, 0x996873c9fdd376b9, 0xe888bb786bbfcf85, 0x146e1e4f03b30e1f,
    0x4c123f36bf07b94e, 0x55653bf23b255cd3, 0x28eb6496203be70c, 0x19069abd663e9795,
    0x2eda821dc2011397, 0x08ef7cacfa56a161, 0xbfc82079af2b2515, 0xa353ca6539c271c4,
    0x753d85659bde5a37, 0x16548a903091df48, 0x37c95d27a7f9a443, 0x297f92b6b5f6f55c,
    0xda609e69195b1249, 0x75702254231a620e, 0xb5e9a90385d12541, 0xf61f2d02547c9814,
    0xed34bd3e8310561b, 0x69ddc94b6976e022, 0xcc7667a871476ef4, 0x418370a48207c594,
    0x0cfe82acb2231392, 0xbf99ed1e2f6f7ae7, 0xbb72f378b7c8cafe, 0x635c17d5daeda560,
    0x7ee0380a96e454cb, 0x173636e1df4c57c1, 0x91fbfd0875b39526, 0x7d2ed22d2ae3dc71,
    0xce7e06eb0566940d, 0xb9becb6ccdeb0284, 0x75b3f52830da9667, 0x3fa75e31d9787c18,
    0x5d176700992d4dc9, 0x7ab57cfc0f874c8c, 0xb0a1a475cca436c5, 0xf5cfd9313f3d6a3e,
    0xa4c6603564c041ee, 0xcc49dda0d6dc04d3, 0x72c9ac82526f2d5e, 0xa418b7c7a776d442,
    0xd335e2cd9f0046aa, 0x5194eb539100b910, 0xada57b50aa35dd11, 0x2fc615624428da0f,
    0xaf0373365e867b69, 0x1d97b54f54c3d6f1, 0xf193f46caf2cc43a, 0x27c589cd9946a915,
    0xe2feb9079d566e37, 0xef1d1a72c4707569, 0xc427d4f489a4f1ff, 0xcd6b93704bb3372f,
    0x31f861142179554c, 0x094cc9e22f4b5938, 0x540402cee14a9761, 0x945eb92ca4484533,
    0xf6f3e9db4d6382b6, 0xceab8123468541bc, 0x111ba05c8c2538e4, 0xc6f13d1522b1e58b,
    0xc2ed2baa69d717de, 0x83fe02676c80e347, 0xd383e713323a7346, 0xe977412aa6756763,
    0xd7b4713e4885b560, 0xb0d89e79ec3e9424, 0xfc2ac2935fb37070, 0xfd1385bd35ee9893,
    0xbd73e313abfa9681, 0x055cb7adfa6b5b89, 0x9a3d5680ae37eda6, 0x18b45a8d3ee5d50a,
    0xeea1a266e103e69b, 0x6f6f0a0dcb8075ef, 0xd8ed4ba8ea3f9d23, 0x5eb4ab75e09c6b81,
    0xa8ef175d57508deb, 0x44fcf4cb0259f88a, 0x582c714a20dd98ee, 0x67cb393f566c1d72,
    0x5a50c85fb3ac78f1, 0x3a937f21842d0adf, 0x6055c7abbda2e8d2, 0xab5008e22ffa5b53,
    0x4898ea6d33a531fc, 0x25d88d3c372be0b2, 0xc49fce747a03aeb3, 0xf699874c27d28132,
    0xe70be27529ee751d, 0x0a6d292438d8922a, 0x30818a867ebc2492, 0x476b75e7f6e26cf9,
    0xd782dbef7ac0303b, 0xee4fe8076467dcde, 0x62d2487b215f4470, 0x1357fa45bdad1468,
    0xd8197b9d65717966, 0x2ce7c1f405fc0cb5, 0xc123fd7be331daa6, 0x6e716963cb46eeaa,
    0x6889990bb040f271, 0x24e450619e986b65, 0x70ff05dbe89009a2, 0x68247dd60fcab6f0,
    0x7c624ce3f4ce9482, 0x52ad1338e3a36587, 0xabbf9965c721edaf, 0x5511ab5fe053e076,
    0x1576a977e87afd2a, 0x59e38cd214cccd17, 0x51a92acfcde301ba, 0x8cfd8f50b6f1be71,
    0xb1b7337dd410a7aa, 0x3ce257811e4c9260, 0x4a524d89ebace3a1, 0x298cf159a3c8e33f,
    0x063516d97d72bdad, 0x22de5685e7ad6c9d, 0x99e7546accc90946, 0xe27d0e39721c5a6c,
    0x228a5fc29a702e2c, 0xbd3f6d130557007a, 0x0c1e6b0ab8cf41b2, 0x3cc166ef3807f8d9,
    0x00a523b75cbb067c, 0x005027155bd98ac1, 0xa4c66ff579d95c36, 0x882c4a90abcc1100,
    0xe7caa973ebf33b37, 0xc5e1e0ffb04e54fc, 0xe21f893ebbc2e498, 0xfb8abca8ff5bae57,
    0x064a721c7f0b02cf, 0xa1ebfb29ae28bae9, 0xc76717812a9468ef, 0x3e245962b1114577,
    0xf467fbdc8d5dea5c, 0xc020aeb9d471622b, 0xde3ee652508800b6, 0x7d067a11d94fe05b,
    0xf2b178a056e4a532, 0x28b08eabe2f19828, 0x9fe21e06924264e4, 0x92313fa90e54c838,
    0x71d360b35d821715, 0x7a76d4d344f462b8, 0x74dc88318d101e95, 0x9481b2980df6bc70,
    0x536b02d652192207, 0xc8a32893034d0f3b, 0x49a5599375ada953, 0x4eedffe84aed4909,
    0x1fab9c54cc947833, 0x00d3a2fdfa6cc99c, 0x63505f200b905025, 0xa7234e964866f837,
    0x5a00f0b4b824057d, 0xfe65c75fe5969383, 0xa315504710db88b4, 0x9ef8d613ee7f9a7f,
    0x654a2ff6eceeff71, 0xb7ffa9007b0369b2, 0x24ef8536e9a557ab, 0x47397d79c364d87d,
    0xe8d3c27041ad720e, 0x6ba33ae26e85f862, 0x336e18be3a0f590b, 0x4e8bd81d4dee05a9,
    0x6ebe27966a14a215, 0x6b868fdd0cf4ba5d, 0xbff15b8e098953a0, 0x84376de04c0b4d7e,
    0xf8a817df529fb09d, 0xe91fb595aade0710, 0x4b35b15324ec61b7, 0x445c400e0e239c55,
    0x3f8d0b7506f81dcf, 0x503ac582445d3333, 0x05bd301459f7cc6b, 0x56a85544399ad8dc,
    0x63d6d5d03b5ba753, 0x7b24150dd1ec69dd, 0x959b2feba47292ad, 0x36c5efbd8faebd0b,
    0xf516f9df1ec335af, 0x0dd6204f5b60cfe2, 0x2f709d6145d034e9, 0x969616db8e9915a2,
    0x45369afefb99e41d, 0x4daed50d505afe78, 0x2c4abdd0dccaaf5e, 0x60ac39e27a07dfe8,
    0x76258dbf755150f9, 0x8272d3e928b0167e, 0xb6e5d02b3c23044e, 0xeee79df536ae12e2,
    0x8fc0af8a0a358026, 0x3587e4ae2092a97b, 0x4db800885121588d, 0x45c962f313368494,
    0x3153d3d31e42b763, 0x807018fb119cb2c6, 0xa8968b724a3bfe53, 0x502b5e7b3bc9b892,
    0xc8d4d1f53edf4e71, 0xcd6a2d473145fd4b, 0xca3c2ce78cd02a10, 0xe1ec9b567de9ec69,
    0x29e27298fb65d240, 0x348cd7b2e492d7d8, 0x4977f0171d993f02, 0x20705841e9c36223,
    0x86d48944b02ffffa, 0xf1a58f60c815af43, 0xd3b1d891857da972, 0xd50892529c6f0674,
    0x479f361577d5717f, 0x005f72bd3c06d384, 0x7b2ab690c9f44ff6, 0xa50a4053a7cb02d1,
    0xcfa16317daf9f1d0, 0x2a11d9953c89e2f6, 0x932472775ba2dd89, 0x2dbd595a592769dd,
    0xcd47f95af5c99b2c, 0x5ae6b28529e0e6c0, 0xe19e1b43cee68478, 0xd85e8408c0605313,
    0x300873d940b46459, 0x10c06b0ed43ed2b0, 0xe4744d3769af9aae, 0x87ab19cf5bebeb96,
    0x54bf382c86782d95, 0x604379c8c182882c, 0x7f5d5e36d8ee9bef, 0xf16cbc4716c28972,
    0x1ec5554b2786664d, 0xbf36af1235a20187, 0x00f7e5414460d3f8, 0xf6fb56f1b65544d7,
    0xf4e65d251652fc84, 0xa853c7d3c99ee11d, 0x491aa82be611a4aa, 0xeaba5fd17334d986,
    0x2ebb538b1c30452a, 0x5be883c295e1e1d3, 0xc67d10ae84eba976, 0x219aa3df786a6d92,
    0x6240e7f6e188863c, 0x994c8f13445bcb7e, 0x0a4a772d9dae70b0, 0x98dc8b0c30be3212,
    0xafa96e667a121637, 0x081d976af75f6e82, 0x4007eb0a2611aea8, 0x02d59f417c8cede4,
    0xf17de131d033d5eb, 0x7527469b2b0ff3e4, 0xaefe5598a31c1495, 0x0d533736fcc6c2fb,
    0x498d909ab47d8c17, 0x19d02376f2afca0b, 0xd8033db84da0b278, 0x4351a6ddd2043a61,
    0x174204dadb739120, 0x16c207cd58cead81, 0xfabe09a1e6faafd0, 0xe4f90a996c70ac47,
    0xeb8d38284e5e023e, 0xc5ffc696dd1f114b, 0xdceffbb178c524f3, 0xda6447e7b3fd0b26,
    0x6010b13bcccb4d1b, 0x36537ef270c5c241, 0xef06d27cc009b5e0, 0xa7cb088f2688ad5c,
    0xd24059550c4c26a6, 0x6477366aff945c0a, 0x4fe89b4a22f56b6c, 0x04e8d938a8798b15,
    0x154387bc0b0733ec, 0xf4b5e06959b9af9e, 0x7b7b08afe9d16999, 0xa7b8078cd225e2d6,
    0xc0bc2e5a1c9cfee1, 0xa91680efc36bca2c, 0xe28f9e5c4109e1b2, 0xa89d04fce4ff5a13,
    0x3fdaa3ccf3de4446, 0xcf29638b5f01876c, 0xa89d23f32b18a8bb, 0x3ecdce8a749fbe27,
    0x175a1410020a3ae7, 0x475b22ebb77d9d79, 0x4acd63bf37b9e739, 0xc928e3587f748bc7,
    0xc307fd74e6145d8d, 0xeebccb3ca8e7fc2a, 0xd2b1e7ec847b4b1c, 0x2a60e06a031f03c5,
    0x5d9dc00b56b704c1, 0x7ed1ae596adbe660, 0xb219985fbbac947c, 0x4e2261ae6bdb479e,
    0x4c94ef00d4a54ace, 0x3591232f429425f7, 0x869fd684c35da943, 0xf3efba90bf84615c,
    0x44a135180af3dbc2, 0x802c43635a92f560, 0xb9b44edb752f695c, 0xe3a9ecacd7e9a0b7,
    0x35d0247f554aa7b2, 0x9ea8b759b1318e85, 0x0f5e3c43b10ebbce, 0xb7aabe85299ec232,
    0x256922aefb9715d7, 0xf04ef45fc860db38, 0x8581283aba241939, 0x93de5fdfdec351d7,
    0x29fe23721585677a, 0x7b1d0717f621c869, 0x53b07c6c79642b07, 0xc250cf2f42ef8007,
    0x1e637eadb42578e8, 0x73b2fb26a8cab461, 0x13ce4ff83fd18b6b, 0x9b97340ab0885070,
    0xecdad3544e7b8d9d, 0x5901b690fe3cfbf1, 0xc62f4b3526f93031, 0x316b4592b4a47d8a,
    0xc1164af4c2106c56, 0xbc68d29944d1b865, 0x545b2f93575c1070, 0x288877094aad2ff6,
    0xd01e89b0b00785ed, 0x3fdd2a130141c1e5, 0x3cb674e425007757, 0xb2dd2093f0219ce9,
    0x5868a25083d33675, 0xf2b23f2900ea246d, 0xc2931a8807205489, 0x43232ea8e6154e6d,
    0xf3e9cf2a24bbcd8c, 0xa1928d75521c9267, 0x49a1fa57c7c7b517, 0x8eedfc36b9b371b8,
    0xc0c56a9b4606fa99, 0xe2907f88256a3b57, 0x2cfc90998e857e07, 0x642fffc591caccb3,
    0x2fa3b650998f0e9c, 0x5814ff5a1c0418ab, 0x0e59178c78eaad30, 0xa1ee374b3538ebfe,
    0x2db179d65671cd10, 0xdbb2cd5261d88afa, 0x50aecb142463e9a4, 0xb0e4ef3b4e365870,
    0x052726da3c5ab11f, 0xa7a4a0c01705562e, 0x36baef2880dcfaaa, 0x02f8fa4702901d76,
    0x6d1158db200c0b0f, 0xfde0f1b2e31afcde, 0xebb8cf960942467d, 0x905a820c79277dca,
    0x4f9403db264d07e2, 0x0111228910c4fb54, 0x7a8e6491ce4fce79, 0x109385a356ab78a4,
    0x6dd0b2d637be545d, 0x6b625b97cd9bbb99, 0x2af92c2a45e1870a, 0x84512b235e342676,
    0x63f8b8bb301626a0, 0xca93666050004174, 0x8efa0c6558a16647, 0x21f12b370cf566d8,
    0x06d9efeeca8c7b6b, 0xa7b565c1592efd4d, 0xd4625a0b4c272354, 0xe9331c8c6193a094,
    0x3699a43bd2115506, 0xfb9767566504cfe2, 0x187e53f526a61580, 0xbd680ea5716a86aa,
    0x7db13a53a6c49182, 0x26d740275eee7091, 0x11811da52038c902, 0xaeca645fe59bc9ac,
    0x35a99d36986b4f1b, 0x04dd8a0af346ca61, 0x753aed46e92b0eaf, 0xc8e6f073b9cf1de2,
    0xf01a953293f518ef, 0xefab2951eb057cc6, 0x8e0f7bf4cdaa2f43, 0xf88b0149696512a4,
    0xd44af1c9f1329ca5, 0xd2367eed999c2f51, 0x1923e762e27a415d, 0x59ad46d677dc8ba7,
    0x17ab8489f698334f, 0x701cf9765f229362, 0xf76dee6e8043d8f3, 0x4cae4e9d88209ba9,
    0x3a7132fa713d5dd8, 0xde911f86880d20bd, 0xce6ec0d70be845b9, 0xbca5106e33a433fb,
    0xf3344dbdc7345fcc, 0x43c88a698dd33363, 0xec6156e114aae7bf, 0x7c145c46303ad953,
    0x0cd9cada5218bdc1, 0x85aecd2475acfa89, 0x8f13caee3296af93, 0x807cfa97cee9042c,
    0xa439e37eb02332c9, 0xe13feb7765c4336c, 0x70211a892df6d9a4, 0xa9cd4cc273d5cc8c,
    0xf582a24f1ba4ba53, 0x0b07b562be37ef6a, 0x7ddcab2cabde31a2, 0x6ec4e3290a868c8d,
    0xd2dd4ae50e2d12df, 0x2a34d8694afde69e, 0xfd4fba25544070c8, 0xb9acb9f0080b5222,
    0xbda023ef6782af65, 0x626a0b04b8fe154e, 0x34294c29f792c442, 0xc41790b38856f3e4,
    0xf720bce5040695ef, 0xb2667e77a7fd538e, 0x93410f2d202d1de8, 0xf5d24be6a5f99014,
    0xb22a0f6195a43271, 0xff1fc3caa966bd93, 0x789f1cc7c29ef0b6, 0x78f666bd3f5151e2,
    0x135f9b74bbfe388f, 0xa26d702234922ff8, 0x611652c076bac672, 0x21e774952be5521b,
    0x2bf6ec9cdde59b75, 0xa5a09d843b1f86a4, 0x81fcb7c35518bb92, 0xbeeda2e0246478a9,
    0x4da8914b9d8cbad5, 0x13fa0ba302374fbe, 0xd234057730e21355, 0xaf4d65e811395c41,
    0x15a09823e73b244f, 0x6db90175a87958ff, 0x5a2562fca3836db7, 0x67dc3d0d2dc3d51d,
    0x04779828381681a7, 0x7d503ba7871b0d79, 0xc4b134424fe09ff0, 0xfcc8dc9f62720b00,
    0xdaf6dbb5a8faafea, 0xa2a62642f2a8ebd2, 0x360affed30c9d11c, 0x3103c7b7f1f8385d,
    0x993f923dc3087b42, 0x2aea613462f99497, 0x885d6ece67728d74, 0x484c92220921c1ba,
    0x80c2c160fb50ee4b, 0x09e465536e076279, 0xaf475549a97f1b37, 0xc30b800d546b1b66,
    0xc1d0dd577dd80802, 0x76ac655c18ed967a, 0x3b8cf1f5b6db89a3, 0x617ff1a7629421d9,
    0x0d2de9f2a2539ccc, 0x30eddf20a7e5d40d, 0xb7d3db259faccf6b, 0xeb7e387229314c7d,
    0x19358e018d7ef4cd, 0x835ef2f66e568f67, 0xfbfb3f4eb6176b2a, 0x1af8b00ede0b666e,
    0x266d07cf4888ae60, 0x8a135ead15148e34, 0x75f8b469cf9eb7a9, 0xf586ad2314a47560,
    0x32b7dfb77b42b75b, 0x70aa48b5991be7d9, 0x3304239d26fe2801, 0xfb29251a6e9a71d8,
    0xcff092f446cac107, 0x4c18f0d37b22e42a, 0x7ba9d8397155bc2d, 0x47a46e5ffb990e41,
    0xe6e3c1a914bb16a9, 0xb26980c97740e7f9, 0x6d376449d98c5558, 0x4a01e5d0f58feef0,
    0xb184595441bbfc7e, 0x8068627970ed1321, 0xd538a8569749313b, 0x05e6bf21789a5a2a,
    0x401170abc9522d03, 0x027f6f1c3d300091, 0x5960d108cf44822e, 0x3346feb46a80e5f6,
    0xc400f4a21a1d2df3, 0xe38eb32d01f1ff5a, 0x1b156f3f75478e42, 0xc606fc30106a7762,
    0xac23797f2d3c0da8, 0x364dfc283621ec63, 0x2b1f56c4c0a0f6c1, 0xb265f0c6c8ff3fff,
    0xe83ed5f8baea5804, 0xd1584a7a62cf3655, 0xb38228e1437f1b07, 0x590e9467adf75eab,
    0x57b2ac8b82b2788a, 0x284215c5123fa7fa, 0x6cf5b900361484b8, 0xbe6282c71e006764,
    0xc3d315ef78df452d, 0x4e8a289207e07b44, 0x52ad8a1b8957abd8, 0xf70884bbf2e73a37,
    0x757f29c69b0e9972, 0x469f6ab50b3e1f7f, 0xc4d9bb415e3d173b, 0x191830ccb6c8b6e9,
    0xc4aa7e9aac29dada, 0x7894fd81a5292ce4, 0x19e70a860d2f4901, 0x7e7966c9ade657a0,
    0x203ef23219e01b4a, 0x047b6b451bdb8b12, 0x98b9950cfb4e7bf1, 0x55b35abd4757f4e9,
    0xd9529e2b7bdaa8ee, 0xa629cd92323a5589, 0x09fed0ace41d32fa, 0x4382742dc5f233c6,
    0x25b0856b8102410f, 0x21d330cb5a382ef1, 0xffc624447fc8d8e2, 0xbc5ab07cc40036f0,
    0xae7b139839cdbf08, 0x462d3bdf3f6ede59, 0x8c52e6b539db59a2, 0xdc154c74bb1c3460,
    0xdf23c2e010b4320d, 0x4be0bd27adc712c1, 0x82c647850ad8c771, 0xc4ee4d17441cf26b,
    0xf0019d3a2312f464, 0xd03e4dd46701c1b3, 0x1295db1ae2b576fe, 0x10d7bef222ca59d9,
    0xef32338b198fbd3a, 0xf6bf18252fef0301, 0x087a5e9a5a3c458e, 0xc0dba6b84b6ab7cd,
    0xf7f7afeade0834cc, 0xca03887d48ba833e, 0x1ea7369d6d3130c2, 0x921aba332c01d7be,
    0x0f799fc2b10a3a77, 0x9ba154d00e98ded9, 0x87c1b979a3f533d7, 0xe4884f6e268e6a8f,
    0x01517f52f3f8284b, 0xdda1603d49aaa906, 0xe2b31f321cb2544b, 0xcfa5d897ba613959,
    0x2d3defe5a3cb5a4e, 0x02bc79df250609af, 0xa6ebfcf14373a36f, 0x27023d5aaed77718,
    0x6c33767514144d0c, 0x396588ae8e935726, 0x4b7dd953ffdd91a0, 0xa86c1b332c672b8c,
    0x6c1a32b215933796, 0xab76f0f3f48b4353, 0x1f20bb563e9742f2, 0x23109520773f9c02,
    0xb7a366cd378aa7b0, 0xa9a6e23d2ac2da03, 0xcb3d143859df828d, 0xe43638729e67dd84,
    0xa078736538bfe5b8, 0xf4fd8a80510a864f, 0x42cc4c7b3a0f1013, 0x062043874c619ca0,
    0x7d9074616dad2e98, 0xe8f50d626510c7f5, 0xcf70f8143c10d6a0, 0xb31bffc3d560116e,
    0x09c7bcbcc0310b9c, 0xc274b2bd950e30fe, 0x95fa2c3cdaf27f57, 0x51db11bf54e86779,
    0x841f3184e996a167, 0x4da6c0b6c7758c35, 0x50f3225748b41850, 0x152d5b967a47744a,
    0x1a146105a8d9f129, 0x3fdb75f640d2cc31, 0x63ce531a2de531e8, 0xa23f9ad7c325f143,
    0x398830be6cc2efd1, 0xb8a5e5fa2b655ce7, 0x4975e38fe0f822a1, 0x35bf0ad8a77adf34,
    0xc375e9348f4b17a6, 0x2166e420d5396853, 0x08f8c8ada53296e4, 0x5c82f509e3f7aead,
    0xf710628d76378e32, 0x4ceb7cd4a47fa9e0, 0xe47731bff704c8b6, 0x2c387e4d3352066d,
    0xa19c30e9fa83326f, 0x5fd7bbb457716496, 0xe46e8324b5b8fd6d, 0x3aaf4c02540b0d76,
    0x4cfad9747cf415ac, 0xdf3c5d10585e0288, 0x0d4b262332ee542b, 0x9e1f11b29c38639e,
    0x95154152185c5a9b, 0x302f349c8096b90b, 0xa045cf27f16e0c64, 0xf96377e966f6b802,
    0xbfc7498811d6bd67, 0xa0d27369f19d772d, 0x54ceb27251cd9c2d, 0x1b1d43aaedbb6a33,
    0x140419c12a289f11, 0xf0ca3d7453960434, 0xc7b31ce3a7f8a54e, 0x3f4078b8e1b6f7e1,
    0xbd09b5a8a9f98b0b, 0x84be9fe8c355d6b5, 0x6cd9675405b637bb, 0x08d0aaaa70349efa,
    0x795207c8e89bb944, 0xbc203a0c5cb423ee, 0xdc625061e1a9878c, 0xc99048a11ad0ea89,
    0x19c1fd0a49ebe45d, 0xbe6dc18cd43f4c20, 0x399d1f634a10432a, 0xa58e088cf6b7596c,
    0x4bb91ed1295f34a7, 0x335c8b96c3eab437, 0x9e9f58d40604b27f, 0xf157931a3f5e19eb,
    0x1a76f349455b1065, 0x39305cb4be10dbee, 0x37b4c902f21d812c, 0xa1098670120c8a3c,
    0xab4f0e9d36220fc9, 0x3a6fa53275e6925c, 0x355b18ad3b920f3b, 0x625febed1e10c508,
    0xbd30ff8cf1b92961, 0xa16f7aab524797ec, 0x5f0547e26fb87816, 0x31afbb60aca442b4,
    0xbc3af0aed8dae7b1, 0xea66ea8570c886b6, 0x2e4704e8075d8c4c, 0x7d35b56213c93f21,
    0xfb028a134268cef5, 0x10d1316ab2e8de33, 0x887ca5aa44708c1b, 0x34207a011932c222,
    0xe945b7594b194db1, 0x032115e8d9bb20b6, 0xd9dd7a737ff53069, 0x78bc59e030005e3e,
    0x65687fa134823094, 0x981e515ad85dc7dc, 0x9b841839bf78fafe, 0xdb2569a493897d1b,
    0x0a3f62bcf99eed10, 0x59be7a123bcfcc42, 0x96fa97f8322c0c70, 0xc645dac29bcbdfd0,
    0xd830ce4ec0cbe622, 0x63474b40bc13b67d, 0xe2ca27d355459d5d, 0x8ea015b78baf7de6,
    0x8552279f71148406, 0xef410864c4be61a0, 0x16e048717fadfc94, 0x7ed6d7da11fdca03,
    0xf7165ca733c15608, 0x76dfc39516756ca1, 0x529d8ad5fd355bc5, 0xee760ba7f1f1a838,
    0x45e3f725e5172a0f, 0xf09235edf3ccd001, 0x1d1570ecb48b9b25, 0x8e36b57a2aaba1e1,
    0xcbf92a4ee3a0cc55, 0x5ec27c91a68b736f, 0x67ff0628f9c08e8f, 0xa0c28219a1d6fc27,
    0xb14e92eed7051288, 0x9dc74d01eca7b00f, 0x1bf5d160eaa22669, 0xd07b2446e523dd9e,
    0xd3696078ad47c19d, 0x11cab0e1915f3200, 0xf3b6ece8d6b7a638, 0x576c9bc326f2caea,
    0xe8fdf4ed2b63931d, 0x0a9e0343ccac135d, 0x588a27a7137aab32, 0xbb4109adfc912682,
    0xb1222ea95c5ec114, 0x9cbb09af3bc505b6, 0x36d8efd355d5e676, 0x4c8136f7b6831fbe,
    0x6aacfc69bea778a7, 0xa7c7ea733c0f8afd, 0xcbfe0974dfd93c11, 0x5d9490176461567a,
    0x008be3540a3a2217, 0x441d5737ecd10db2, 0x9269400fda7e904b, 0xe4113e630d22b553,
    0xf557d0004ab812ae, 0x00d5c93cf5d7d351, 0x09980bc7d35535de, 0xd319ae2a948ef0d3,
    0x0fd7d6b9fe74cab1, 0x7273000b1b6872d2, 0xb92427d344c81257, 0xa47ddebce4e05ee1,
    0x4584853b75b30dcf, 0x0b180ae0c2ad5f7c, 0xd9228109c451fb0e, 0x9493753797861881,
    0xbc3eb136431fb269, 0x709f4aa34f869502, 0x5fac35bf99857777, 0xad3c934dce21e00c,
    0x490e8b90ab92d746, 0x72ec28502c86f11d, 0x056d7738ed7bb74c, 0x9a20df4b110cae08,
    0x5ff40724ec388798, 0x9b59ca20425e643d, 0xf733b9864185d713, 0xd4b7eb51fdeb4070,
    0x6941ebd6ef89a910, 0x28233b5678787802, 0xcbc233473fa11218, 0xd4bd674fd488fee1,
    0xa888c0f265a8685f, 0x62c616e3ad9bbace, 0x72bc6500e5b14f84, 0x47c21d3e828b9f79,
    0x5aabe3067734f015, 0xd952051f7a7a8ca6, 0x1900d7c6ca07fcb3, 0xeb58a9bda5e081d3,
    0x94e7677f88a405a4, 0x6f98d1103c1f1248, 0x625e2daf7a9f2eb5, 0xbbf4545e3470ee12,
    0x90b06efb03e4f865, 0xdd591b675772ff81, 0x4351e0ff03fffb4e, 0x69d19aa320e969cd,
    0xe6ac7f0e9b21df1c, 0x344f466fe076a8ae, 0x9e175fba47fc9203, 0xdc3fb2e1757f1585,
    0x9855402c1c4425e7, 0x22acbb972117cfb9, 0x5be327be33c531a8, 0x0bed32cb8c5c0673,
    0xff91a377a9e0fb61, 0x1d5528c6dc3f80fa, 0x4cb1d062a83b90ad, 0x76bc36603826926b,
    0x0e2c9297ec45a0a9, 0x6d418d7004631411, 0xa80d5612c6254728, 0x3eb23a557af5e514,
    0x275e875f96a94b16, 0x30dd1ced9a8f46e5, 0xe4ad6c5e153caef4, 0x86f3619d0729e35f,
    0xd683f58b9a287d60, 0xbea9e815aaad2dba, 0xc4bc5dc7695a5ae3, 0x46bb68fdc7c4dfef,
    0xa11197cd10160423, 0x570d9e3d673ef9a2, 0xbd9e8b535bc48b5a, 0xa88b8a75a3f679f1,
    0xab3f1a4a7502a5a0, 0xb95d0dd1273518bf, 0xe2c343d29fa16d00, 0x0a9f65cfa01f09d4,
    0xff9e3d0b7639f5af, 0x26e00aab24def7ac, 0x796ef5a2f2c43fe2, 0x7911b707282e9946,
];
